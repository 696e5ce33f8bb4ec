use anyhow::{Result, bail};
use serde::Deserialize;

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
}

/// Exchange a long-lived IBM Cloud API key for a short-lived bearer
/// token. Every call re-exchanges; there is no caching or refresh. A
/// rejected exchange surfaces the upstream's raw error text.
pub async fn exchange_api_key(iam_api_url: &str, api_key: &str) -> Result<String> {
    let url = format!("{}/identity/token", iam_api_url.trim_end_matches("/"));
    let params = [
        ("grant_type", "urn:ibm:params:oauth:grant-type:apikey"),
        ("apikey", api_key),
    ];
    let response = reqwest::Client::new()
        .post(url)
        .header("Accept", "application/json")
        .form(&params)
        .send()
        .await?;

    if !response.status().is_success() {
        bail!(response.text().await?);
    }

    let body: TokenResponse = response.json().await?;
    Ok(body.access_token)
}
