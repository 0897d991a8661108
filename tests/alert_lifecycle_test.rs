use reqwest::Client;
use serde_json::json;
use uuid::Uuid;

mod common;
use common::utils::{create_test_user_and_login, spawn_app};

async fn record_reading(
    client: &Client,
    address: &str,
    token: &str,
    heart_rate: i32,
    spo2: i32,
) -> serde_json::Value {
    let response = client
        .post(format!("{}/vitals/record", address))
        .bearer_auth(token)
        .json(&json!({
            "heart_rate": heart_rate,
            "spo2": spo2,
            "ppg_status": "normal",
            "fall_status": "safe",
            "recorded_at": chrono::Utc::now()
        }))
        .send()
        .await
        .expect("Failed to record vital.");
    assert!(response.status().is_success());
    response.json().await.expect("Invalid record response")
}

#[tokio::test]
async fn test_sos_without_prior_reading_carries_null_vitals() {
    let app = spawn_app().await;
    let token = create_test_user_and_login(&app.address).await;
    let client = Client::new();

    let response = client
        .post(format!("{}/alerts/sos", app.address))
        .bearer_auth(&token)
        .send()
        .await
        .expect("Failed to trigger SOS.");
    assert!(response.status().is_success());

    let body: serde_json::Value = response.json().await.expect("Invalid SOS response");
    let alert = &body["data"];
    assert_eq!(alert["alert_type"], "sos");
    assert_eq!(alert["status"], "active");
    assert!(alert["heart_rate"].is_null());
    assert!(alert["spo2"].is_null());
    assert_eq!(
        alert["details"],
        "SOS emergency triggered by user. Emergency contacts have been notified."
    );
}

#[tokio::test]
async fn test_sos_carries_latest_reading_values() {
    let app = spawn_app().await;
    let token = create_test_user_and_login(&app.address).await;
    let client = Client::new();

    record_reading(&client, &app.address, &token, 72, 97).await;

    let response = client
        .post(format!("{}/alerts/sos", app.address))
        .bearer_auth(&token)
        .send()
        .await
        .expect("Failed to trigger SOS.");
    assert!(response.status().is_success());

    let body: serde_json::Value = response.json().await.expect("Invalid SOS response");
    let alert = &body["data"];
    assert_eq!(alert["alert_type"], "sos");
    assert_eq!(alert["heart_rate"], 72);
    assert_eq!(alert["spo2"], 97);
}

#[tokio::test]
async fn test_resolving_an_alert_stamps_resolved_at_and_drops_active_count() {
    let app = spawn_app().await;
    let token = create_test_user_and_login(&app.address).await;
    let client = Client::new();

    // hr 45 is below the 60-100 range, so recording raises one alert
    let recorded = record_reading(&client, &app.address, &token, 45, 98).await;
    let alerts = recorded["data"]["alerts"].as_array().expect("No alerts");
    assert_eq!(alerts.len(), 1);
    let alert_id = alerts[0]["id"].as_str().expect("Alert without id");
    assert_eq!(alerts[0]["alert_type"], "abnormal_hr");
    assert!(alerts[0]["resolved_at"].is_null());

    let listed: serde_json::Value = client
        .get(format!("{}/alerts", app.address))
        .bearer_auth(&token)
        .send()
        .await
        .expect("Failed to list alerts.")
        .json()
        .await
        .expect("Invalid list response");
    assert_eq!(listed["active_count"], 1);

    let response = client
        .post(format!("{}/alerts/{}/resolve", app.address, alert_id))
        .bearer_auth(&token)
        .send()
        .await
        .expect("Failed to resolve alert.");
    assert!(response.status().is_success());
    let body: serde_json::Value = response.json().await.expect("Invalid resolve response");
    assert_eq!(body["data"]["status"], "resolved");
    assert!(!body["data"]["resolved_at"].is_null());

    let listed: serde_json::Value = client
        .get(format!("{}/alerts", app.address))
        .bearer_auth(&token)
        .send()
        .await
        .expect("Failed to list alerts.")
        .json()
        .await
        .expect("Invalid list response");
    assert_eq!(listed["active_count"], 0);
}

#[tokio::test]
async fn test_re_resolving_an_alert_keeps_the_original_timestamp() {
    let app = spawn_app().await;
    let token = create_test_user_and_login(&app.address).await;
    let client = Client::new();

    let recorded = record_reading(&client, &app.address, &token, 130, 98).await;
    let alert_id = recorded["data"]["alerts"][0]["id"]
        .as_str()
        .expect("Alert without id")
        .to_string();

    let first: serde_json::Value = client
        .post(format!("{}/alerts/{}/resolve", app.address, alert_id))
        .bearer_auth(&token)
        .send()
        .await
        .expect("Failed to resolve alert.")
        .json()
        .await
        .expect("Invalid resolve response");
    let first_resolved_at = first["data"]["resolved_at"].clone();
    assert!(!first_resolved_at.is_null());

    let second_response = client
        .post(format!("{}/alerts/{}/resolve", app.address, alert_id))
        .bearer_auth(&token)
        .send()
        .await
        .expect("Failed to re-resolve alert.");
    assert!(second_response.status().is_success());
    let second: serde_json::Value = second_response
        .json()
        .await
        .expect("Invalid resolve response");
    assert_eq!(second["data"]["status"], "resolved");
    // No-op: the stored row comes back unchanged
    assert_eq!(second["data"]["resolved_at"], first_resolved_at);
}

#[tokio::test]
async fn test_resolving_missing_or_foreign_alert_returns_404() {
    let app = spawn_app().await;
    let token = create_test_user_and_login(&app.address).await;
    let client = Client::new();

    let response = client
        .post(format!("{}/alerts/{}/resolve", app.address, Uuid::new_v4()))
        .bearer_auth(&token)
        .send()
        .await
        .expect("Failed to call resolve.");
    assert_eq!(response.status().as_u16(), 404);

    // Another user's alert is invisible to this one
    let recorded = record_reading(&client, &app.address, &token, 45, 98).await;
    let alert_id = recorded["data"]["alerts"][0]["id"]
        .as_str()
        .expect("Alert without id")
        .to_string();

    let other_token = create_test_user_and_login(&app.address).await;
    let response = client
        .post(format!("{}/alerts/{}/resolve", app.address, alert_id))
        .bearer_auth(&other_token)
        .send()
        .await
        .expect("Failed to call resolve.");
    assert_eq!(response.status().as_u16(), 404);
}
