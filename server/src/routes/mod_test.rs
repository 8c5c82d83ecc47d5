use super::*;
use crate::state::test_helpers;

#[tokio::test]
async fn healthz_is_ok() {
    assert_eq!(healthz().await, StatusCode::OK);
}

#[test]
fn api_routes_build_with_and_without_cors() {
    let state = test_helpers::test_app_state();
    let _open = api_routes(state.clone(), &ServerConfig { port: 3000, cors_allow_any: true });
    let _closed = api_routes(state, &ServerConfig { port: 3000, cors_allow_any: false });
}
