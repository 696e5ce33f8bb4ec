use std::env;

/// Server configuration, read once at process start. Every value has a
/// baked-in default so the demo runs with no environment set up.
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub login_username: String,
    pub login_password: String,
    pub iam_api_url: String,
    pub watsonx_api_url: String,
    pub project_id: String,
    pub model_id: String,
    pub system_message: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        let login_username =
            env::var("AGENTDESK_LOGIN_USERNAME").unwrap_or_else(|_| "demo".to_string());
        let login_password =
            env::var("AGENTDESK_LOGIN_PASSWORD").unwrap_or_else(|_| "watsonx".to_string());
        let iam_api_url = env::var("AGENTDESK_IAM_API_URL")
            .unwrap_or_else(|_| "https://iam.cloud.ibm.com".to_string());
        let watsonx_api_url = env::var("AGENTDESK_WATSONX_API_URL")
            .unwrap_or_else(|_| "https://us-south.ml.cloud.ibm.com".to_string());
        let project_id = env::var("AGENTDESK_PROJECT_ID")
            .unwrap_or_else(|_| "00000000-0000-0000-0000-000000000000".to_string());
        let model_id = env::var("AGENTDESK_MODEL_ID")
            .unwrap_or_else(|_| "ibm/granite-3-8b-instruct".to_string());
        let system_message = env::var("AGENTDESK_SYSTEM_MESSAGE")
            .unwrap_or_else(|_| "You are a helpful assistant.".to_string());

        Self {
            login_username,
            login_password,
            iam_api_url,
            watsonx_api_url,
            project_id,
            model_id,
            system_message,
        }
    }
}
