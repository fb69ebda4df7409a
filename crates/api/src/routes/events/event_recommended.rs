use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use campusfeed_database::{Category, Database, Event};
use campusfeed_result::Result;

#[derive(Deserialize, IntoParams)]
pub struct RecommendedQueryParams {
    /// Comma-separated preference categories; only the first ten are
    /// applied, the store caps membership filters there
    pub categories: String,
}

/// Events matching the given preference categories, newest first
#[utoipa::path(
    get,
    path = "/events/recommended",
    tag = "Events",
    params(RecommendedQueryParams),
    responses(
        (status = 200, description = "Matching events, newest first", body = Vec<Event>),
        (status = 400, description = "Unknown category")
    )
)]
pub async fn recommended_events(
    State(db): State<Database>,
    Query(params): Query<RecommendedQueryParams>,
) -> Result<Json<Vec<Event>>> {
    let preferences = parse_categories(&params.categories)?;
    db.fetch_recommended_events(&preferences).await.map(Json)
}

fn parse_categories(raw: &str) -> Result<Vec<Category>> {
    raw.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(str::parse)
        .collect()
}

#[cfg(test)]
mod tests {
    use campusfeed_database::Category;

    use super::parse_categories;

    #[test]
    fn parses_comma_separated_categories() {
        assert_eq!(
            parse_categories("JEE, NEET,Hackathons").unwrap(),
            vec![Category::Jee, Category::Neet, Category::Hackathons]
        );
        assert!(parse_categories("").unwrap().is_empty());
    }

    #[test]
    fn rejects_unknown_categories() {
        assert!(parse_categories("JEE,Quiz Night").is_err());
    }
}
