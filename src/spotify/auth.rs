use base64::{Engine, engine::general_purpose::STANDARD};
use reqwest::Client;

use crate::{
    Error, Res,
    types::{ClientCredentialsResponse, Credentials},
};

/// Builds the `Authorization` header value for the client-credentials grant.
pub fn basic_auth_header(credentials: &Credentials) -> String {
    let raw = format!(
        "{id}:{secret}",
        id = credentials.client_id,
        secret = credentials.client_secret
    );
    format!("Basic {}", STANDARD.encode(raw))
}

/// Exchanges the client id and secret for an access token.
///
/// Any transport error, non-success status or unexpected body is returned as
/// an error; there is no retry.
pub async fn request_client_token(
    client: &Client,
    token_url: &str,
    credentials: &Credentials,
) -> Res<ClientCredentialsResponse> {
    let response = client
        .post(token_url)
        .header(reqwest::header::AUTHORIZATION, basic_auth_header(credentials))
        .form(&[("grant_type", "client_credentials")])
        .send()
        .await?
        .error_for_status()?;

    let token = response.json::<ClientCredentialsResponse>().await?;
    if token.access_token.is_empty() {
        return Err(Error::UnexpectedResponse(
            "token endpoint returned an empty access token".to_string(),
        ));
    }

    Ok(token)
}
