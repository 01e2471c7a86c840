mod test_auth;
mod test_http;
mod test_requests;
mod test_responses;
