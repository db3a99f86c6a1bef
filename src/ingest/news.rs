/// NewsData.io Flood News Client
///
/// Searches recent news for flood coverage of Malaysia and filters the
/// hits down to titles that actually mention flooding. The API's own
/// relevance ranking is loose, so the keyword filter does the real work.
///
/// API Documentation: https://newsdata.io/documentation

use serde::Deserialize;

use crate::model::{NewsArticle, WeatherError};

const NEWSDATA_BASE_URL: &str = "https://newsdata.io/api/1";

/// A title must contain one of these (case-insensitive) to survive the
/// filter. "banjir" is Malay for flood.
pub const FLOOD_KEYWORDS: &[&str] = &[
    "flood",
    "banjir",
    "evacuate",
    "rain",
    "landslide",
    "inundation",
];

// ============================================================================
// NewsData Response Structures
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct NewsResponse {
    /// Absent on error responses that still return 200.
    pub results: Option<Vec<NewsResult>>,
}

#[derive(Debug, Deserialize)]
pub struct NewsResult {
    pub title: Option<String>,
    pub link: Option<String>,
    #[serde(rename = "pubDate")]
    pub pub_date: Option<String>,
}

// ============================================================================
// API Client Functions
// ============================================================================

/// Builds the news search URL. The user's term is combined with
/// "flood malaysia" to keep results on topic.
pub fn build_search_url(api_key: &str, search_term: &str) -> String {
    format!(
        "{}/news?apikey={}&q={}%20flood%20malaysia",
        NEWSDATA_BASE_URL,
        api_key,
        search_term.trim().replace('%', "%25").replace(' ', "%20")
    )
}

/// Fetch flood-related news for a search term, keyword-filtered.
pub fn fetch_flood_news(
    client: &reqwest::blocking::Client,
    api_key: &str,
    search_term: &str,
) -> Result<Vec<NewsArticle>, WeatherError> {
    let url = build_search_url(api_key, search_term);

    let response = client
        .get(&url)
        .header("Accept", "application/json")
        .send()
        .map_err(|e| WeatherError::RequestFailed(e.to_string()))?;

    if !response.status().is_success() {
        return Err(WeatherError::HttpError(response.status().as_u16()));
    }

    let body = response
        .text()
        .map_err(|e| WeatherError::RequestFailed(e.to_string()))?;

    let articles = parse_news_response(&body)?;
    Ok(filter_flood_articles(articles))
}

/// Parses a news response into articles, dropping results with no title
/// or no link. An absent `results` array parses as zero articles rather
/// than an error — the API omits it when nothing matched.
pub fn parse_news_response(body: &str) -> Result<Vec<NewsArticle>, WeatherError> {
    let response: NewsResponse =
        serde_json::from_str(body).map_err(|e| WeatherError::ParseError(e.to_string()))?;

    let articles = response
        .results
        .unwrap_or_default()
        .into_iter()
        .filter_map(|r| match (r.title, r.link) {
            (Some(title), Some(link)) => Some(NewsArticle {
                title,
                link,
                published: r.pub_date,
            }),
            _ => None,
        })
        .collect();

    Ok(articles)
}

/// Returns true if the title mentions flooding.
pub fn is_flood_related(title: &str) -> bool {
    let lowered = title.to_lowercase();
    FLOOD_KEYWORDS.iter().any(|k| lowered.contains(k))
}

/// Keeps only articles whose titles mention flooding.
pub fn filter_flood_articles(articles: Vec<NewsArticle>) -> Vec<NewsArticle> {
    articles
        .into_iter()
        .filter(|a| is_flood_related(&a.title))
        .collect()
}

// ============================================================================
// Tests
// ============================================================================
