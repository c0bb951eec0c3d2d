//! Raw GitHub REST response bodies captured from the public API.

/// `GET /users/octocat` (trimmed to the fields GitSeek reads plus a few extras).
pub const OCTOCAT_PROFILE: &str = r#"{
    "login": "octocat",
    "id": 583231,
    "node_id": "MDQ6VXNlcjU4MzIzMQ==",
    "avatar_url": "https://avatars.githubusercontent.com/u/583231?v=4",
    "html_url": "https://github.com/octocat",
    "type": "User",
    "site_admin": false,
    "name": "The Octocat",
    "company": "@github",
    "blog": "https://github.blog",
    "location": "San Francisco",
    "email": null,
    "bio": null,
    "public_repos": 8,
    "public_gists": 8,
    "followers": 9000,
    "following": 9,
    "created_at": "2011-01-25T18:44:36Z",
    "updated_at": "2024-02-22T12:14:00Z"
}"#;

/// `GET /search/users?q=octo` (first three items).
pub const SEARCH_OCTO: &str = r#"{
    "total_count": 412,
    "incomplete_results": false,
    "items": [
        {"login": "octocat", "id": 583231, "avatar_url": "https://avatars.githubusercontent.com/u/583231?v=4", "html_url": "https://github.com/octocat", "score": 1.0},
        {"login": "octo-org", "id": 6811672, "avatar_url": "https://avatars.githubusercontent.com/u/6811672?v=4", "html_url": "https://github.com/octo-org", "score": 1.0},
        {"login": "octokit", "id": 3430433, "avatar_url": "https://avatars.githubusercontent.com/u/3430433?v=4", "html_url": "https://github.com/octokit", "score": 1.0}
    ]
}"#;

/// `GET /search/users?q=zzz_not_a_user_zzz`.
pub const SEARCH_EMPTY: &str = r#"{"total_count": 0, "incomplete_results": false, "items": []}"#;

/// 404 body returned for unknown logins.
pub const NOT_FOUND: &str = r#"{"message":"Not Found","documentation_url":"https://docs.github.com/rest/users/users#get-a-user","status":"404"}"#;

/// 403 body returned once the unauthenticated rate limit is exhausted.
pub const RATE_LIMITED: &str = r#"{"message":"API rate limit exceeded for 203.0.113.7. (But here's the good news: Authenticated requests get a higher rate limit.)","documentation_url":"https://docs.github.com/rest/overview/resources-in-the-rest-api#rate-limiting"}"#;
