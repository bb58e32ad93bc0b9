#[cfg(debug_assertions)]
pub fn get_api_url() -> &'static str {
    "http://localhost:3001"  // Development URL when running locally
}

#[cfg(not(debug_assertions))]
pub fn get_api_url() -> &'static str {
    "https://api.tapbak.co"
}

#[cfg(debug_assertions)]
pub fn get_app_url() -> &'static str {
    "http://localhost:3000"
}

#[cfg(not(debug_assertions))]
pub fn get_app_url() -> &'static str {
    "https://app.tapbak.co"
}
