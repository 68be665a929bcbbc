//! Welcome card composition and retrieval.
//!
//! New-member greetings attach an image rendered by an external composition
//! service. The request is a single GET carrying the card fields as query
//! parameters; the response body is the finished image. Failures are the
//! caller's problem to log and skip — there is no retry and no fallback image.

use std::time::Duration;
use url::Url;

use crate::error::AppError;

/// Background image baked into every welcome card.
pub const WELCOME_BACKGROUND: &str = "https://i.imgur.com/6rG8OlA.jpeg";

/// External image-composition endpoint.
const WELCOME_CARD_ENDPOINT: &str = "https://api.popcat.xyz/welcomecard";

/// Hard deadline for the card fetch; the request is abandoned afterwards.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Fixed resolution requested for member avatars.
const AVATAR_SIZE: u32 = 512;

/// Per-join value object describing one welcome card.
///
/// Built from member attributes when a join event arrives and dropped as soon
/// as the outbound request completes; never persisted.
pub struct WelcomeCard {
    /// Member avatar, rendered by the service at a fixed resolution.
    pub avatar_url: String,
    /// Member display name for the greeting line.
    pub username: String,
    /// Guild name for the second line.
    pub guild_name: String,
    /// Guild member ordinal for the third line.
    pub member_count: u64,
    /// Background image URL.
    pub background: String,
}

/// Rewrites a CDN avatar URL to the form embedded in welcome cards.
///
/// The platform client hands out `.webp` (or `.gif` for animated avatars)
/// URLs at its own default size; cards always embed the PNG rendition at
/// 512px. Any existing extension and query string are replaced; a URL with
/// no extension (default avatars carry none beyond `.png`) gets one appended.
///
/// # Arguments
/// - `face` - Avatar URL as produced by the platform client
///
/// # Returns
/// - `String` - The same resource as `<path>.png?size=512`
pub fn avatar_png_url(face: &str) -> String {
    let base = face.split('?').next().unwrap_or(face);

    let base = match base.rsplit_once('.') {
        Some((stem, ext)) if !ext.contains('/') => format!("{stem}.png"),
        _ => format!("{base}.png"),
    };

    format!("{base}?size={AVATAR_SIZE}")
}

/// Client for the welcome card composition service.
#[derive(Clone)]
pub struct WelcomeCardClient {
    http: reqwest::Client,
    endpoint: String,
}

impl WelcomeCardClient {
    /// Creates a client against the production endpoint with the standard
    /// 15-second timeout.
    ///
    /// # Returns
    /// - `Ok(WelcomeCardClient)` - Ready-to-use client
    /// - `Err(AppError::ReqwestErr)` - The underlying HTTP client could not
    ///   be constructed
    pub fn new() -> Result<Self, AppError> {
        Self::with_settings(WELCOME_CARD_ENDPOINT.to_string(), REQUEST_TIMEOUT)
    }

    /// Creates a client with an explicit endpoint and timeout.
    ///
    /// Used by tests to point at a local stub server.
    ///
    /// # Arguments
    /// - `endpoint` - Base URL of the composition service
    /// - `timeout` - Total request deadline
    ///
    /// # Returns
    /// - `Ok(WelcomeCardClient)` - Ready-to-use client
    /// - `Err(AppError::ReqwestErr)` - The underlying HTTP client could not
    ///   be constructed
    pub fn with_settings(endpoint: String, timeout: Duration) -> Result<Self, AppError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self { http, endpoint })
    }

    /// Composes the request URL for a card.
    ///
    /// Every field is carried as a query parameter (`background`, `avatar`,
    /// `text1`, `text2`, `text3`) and encoded by the url crate, so arbitrary
    /// member-supplied display names still yield a well-formed request.
    ///
    /// # Arguments
    /// - `card` - The card to render
    ///
    /// # Returns
    /// - `Ok(Url)` - Fully encoded request URL
    /// - `Err(AppError::UrlErr)` - The configured endpoint is not a valid URL
    pub fn card_url(&self, card: &WelcomeCard) -> Result<Url, AppError> {
        let url = Url::parse_with_params(
            &self.endpoint,
            &[
                ("background", card.background.as_str()),
                ("avatar", card.avatar_url.as_str()),
                ("text1", card.username.as_str()),
                ("text2", &format!("Welcome to {}", card.guild_name)),
                ("text3", &format!("Member #{}", card.member_count)),
            ],
        )?;

        Ok(url)
    }

    /// Fetches the rendered card image.
    ///
    /// # Arguments
    /// - `card` - The card to render
    ///
    /// # Returns
    /// - `Ok(Vec<u8>)` - Raw image bytes, ready to attach to a message
    /// - `Err(AppError::ReqwestErr)` - Network failure, timeout, or a
    ///   non-success status from the service
    pub async fn fetch(&self, card: &WelcomeCard) -> Result<Vec<u8>, AppError> {
        let url = self.card_url(card)?;

        tracing::debug!("Fetching welcome card for {}", card.username);

        let response = self.http.get(url).send().await?.error_for_status()?;
        let body = response.bytes().await?;

        Ok(body.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_card() -> WelcomeCard {
        WelcomeCard {
            avatar_url: "https://cdn.example.com/avatars/1.png".to_string(),
            username: "Sam".to_string(),
            guild_name: "Test Guild".to_string(),
            member_count: 42,
            background: WELCOME_BACKGROUND.to_string(),
        }
    }

    /// Tests the composed request URL.
    ///
    /// Expected: query carries text1=Sam, a text2 containing the guild name,
    /// and a text3 containing the member count
    #[test]
    fn card_url_carries_all_fields() {
        let client =
            WelcomeCardClient::with_settings(WELCOME_CARD_ENDPOINT.to_string(), REQUEST_TIMEOUT)
                .unwrap();
        let url = client.card_url(&sample_card()).unwrap();

        let pairs: Vec<(String, String)> = url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();

        assert!(pairs.contains(&("background".to_string(), WELCOME_BACKGROUND.to_string())));
        assert!(pairs.contains(&(
            "avatar".to_string(),
            "https://cdn.example.com/avatars/1.png".to_string()
        )));
        assert!(pairs.contains(&("text1".to_string(), "Sam".to_string())));
        assert!(pairs.contains(&("text2".to_string(), "Welcome to Test Guild".to_string())));
        assert!(pairs.contains(&("text3".to_string(), "Member #42".to_string())));
    }

    /// Tests that member-supplied text is encoded in the raw query.
    ///
    /// Expected: no raw spaces or reserved characters survive encoding
    #[test]
    fn card_url_is_fully_encoded() {
        let client =
            WelcomeCardClient::with_settings(WELCOME_CARD_ENDPOINT.to_string(), REQUEST_TIMEOUT)
                .unwrap();
        let mut card = sample_card();
        card.username = "Sam & Max?".to_string();

        let url = client.card_url(&card).unwrap();
        let query = url.query().unwrap();

        assert!(!query.contains(' '));
        assert!(!query.contains("Sam & Max?"));

        // Round-trips through the decoder intact
        assert!(url
            .query_pairs()
            .any(|(k, v)| k == "text1" && v == "Sam & Max?"));
    }

    /// Tests that avatar URLs are rewritten to PNG at the fixed size.
    ///
    /// The client library yields webp (or gif) URLs with its own size
    /// parameter; the card must always request the 512px PNG rendition.
    ///
    /// Expected: `.png?size=512` regardless of the incoming form
    #[test]
    fn avatar_url_is_png_at_fixed_size() {
        assert_eq!(
            avatar_png_url("https://cdn.discordapp.com/avatars/123/abc.webp?size=1024"),
            "https://cdn.discordapp.com/avatars/123/abc.png?size=512"
        );

        // Animated avatars are forced to the static PNG frame
        assert_eq!(
            avatar_png_url("https://cdn.discordapp.com/avatars/123/a_def.gif?size=64"),
            "https://cdn.discordapp.com/avatars/123/a_def.png?size=512"
        );

        // Default avatars are already PNG and only gain the size parameter
        assert_eq!(
            avatar_png_url("https://cdn.discordapp.com/embed/avatars/3.png"),
            "https://cdn.discordapp.com/embed/avatars/3.png?size=512"
        );

        // An extensionless URL gets the extension appended
        assert_eq!(
            avatar_png_url("https://cdn.discordapp.com/avatars/123/abc"),
            "https://cdn.discordapp.com/avatars/123/abc.png?size=512"
        );
    }

    /// Tests a successful fetch against a stub server.
    ///
    /// Expected: Ok with the exact response body bytes
    #[tokio::test]
    async fn fetch_returns_body_bytes() {
        let mut server = mockito::Server::new_async().await;
        let body = [0x89u8, 0x50, 0x4e, 0x47];
        let mock = server
            .mock("GET", "/welcomecard")
            .match_query(mockito::Matcher::Any)
            .with_status(200)
            .with_body(body)
            .create_async()
            .await;

        let client = WelcomeCardClient::with_settings(
            format!("{}/welcomecard", server.url()),
            REQUEST_TIMEOUT,
        )
        .unwrap();

        let image = client.fetch(&sample_card()).await.unwrap();

        assert_eq!(image, body);
        mock.assert_async().await;
    }

    /// Tests that a non-success status is an error, not a silent empty image.
    ///
    /// Expected: Err(ReqwestErr)
    #[tokio::test]
    async fn fetch_rejects_error_status() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/welcomecard")
            .match_query(mockito::Matcher::Any)
            .with_status(500)
            .create_async()
            .await;

        let client = WelcomeCardClient::with_settings(
            format!("{}/welcomecard", server.url()),
            REQUEST_TIMEOUT,
        )
        .unwrap();

        let err = client.fetch(&sample_card()).await.unwrap_err();

        assert!(matches!(err, AppError::ReqwestErr(_)));
    }

    /// Tests that a stalled service trips the client timeout.
    ///
    /// The stub listener accepts the connection but never responds; a short
    /// timeout stands in for the production 15-second deadline.
    ///
    /// Expected: Err within the timeout, not a hang
    #[tokio::test]
    async fn fetch_times_out_on_stalled_service() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();

        let client = WelcomeCardClient::with_settings(
            format!("http://{addr}/welcomecard"),
            Duration::from_millis(200),
        )
        .unwrap();

        let err = client.fetch(&sample_card()).await.unwrap_err();

        assert!(matches!(err, AppError::ReqwestErr(ref e) if e.is_timeout()));
        drop(listener);
    }
}
