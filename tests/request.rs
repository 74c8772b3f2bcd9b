use flog::RequestContext;
use flog::request::{IP_UNDEFINED, URI_UNDEFINED};
use std::collections::HashMap;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn client_ip_header_wins() {
    let ctx = RequestContext::from_lookup(lookup(&[
        ("HTTP_CLIENT_IP", "198.51.100.7"),
        ("HTTP_X_FORWARDED_FOR", "203.0.113.1"),
        ("REMOTE_ADDR", "10.0.0.1"),
    ]));
    assert_eq!(ctx.ip_or_placeholder(), "198.51.100.7");
}

#[test]
fn first_valid_forwarded_hop_is_used() {
    let ctx = RequestContext::from_lookup(lookup(&[
        ("HTTP_CLIENT_IP", "garbage"),
        ("HTTP_X_FORWARDED_FOR", "unknown, 203.0.113.1, 10.0.0.2"),
        ("REMOTE_ADDR", "10.0.0.1"),
    ]));
    assert_eq!(ctx.ip_or_placeholder(), "203.0.113.1");
}

#[test]
fn remote_addr_is_last_resort() {
    let ctx = RequestContext::from_lookup(lookup(&[("REMOTE_ADDR", "::1")]));
    assert_eq!(ctx.ip_or_placeholder(), "::1");
}

#[test]
fn nothing_known_gives_placeholders() {
    let ctx = RequestContext::from_lookup(lookup(&[("REMOTE_ADDR", "not-an-ip")]));
    assert_eq!(ctx.ip_or_placeholder(), IP_UNDEFINED);
    assert_eq!(ctx.uri_or_placeholder(), URI_UNDEFINED);
}

#[test]
fn uri_and_agent_are_read() {
    let ctx = RequestContext::from_lookup(lookup(&[
        ("REQUEST_URI", "/cart"),
        ("HTTP_USER_AGENT", "curl/8.0"),
    ]));
    assert_eq!(ctx.uri_or_placeholder(), "/cart");
    assert_eq!(ctx.user_agent_or_placeholder(), "curl/8.0");
}
