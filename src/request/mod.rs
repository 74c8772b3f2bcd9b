//! Who triggered the entry: client address, request path, and user agent.
//!
//! The logger only reads these to build the line header; resolving them from
//! a real HTTP stack is the host's job. [`RequestContext::from_env`] covers
//! CGI-style hosts, which expose the request through environment variables.

use std::net::IpAddr;

/// Placeholder written when no client address is known.
pub const IP_UNDEFINED: &str = "IP NOT DEFINED";
/// Placeholder written when no request path is known.
pub const URI_UNDEFINED: &str = "REQUEST URI NOT DEFINED";
/// Placeholder written when no user agent is known.
pub const USER_AGENT_UNDEFINED: &str = "USER AGENT NOT DEFINED";

/// Request-scoped header fields; every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestContext {
    ip: Option<String>,
    uri: Option<String>,
    user_agent: Option<String>,
}

impl RequestContext {
    /// Empty context: every field renders as its placeholder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads the CGI variables of the current process.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolves the context through an arbitrary variable lookup.
    ///
    /// The client address prefers `HTTP_CLIENT_IP`, then the first valid hop
    /// of `HTTP_X_FORWARDED_FOR`, then `REMOTE_ADDR`; anything that doesn't
    /// parse as an IP address is skipped.
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let ip = lookup("HTTP_CLIENT_IP")
            .and_then(|v| valid_ip(&v))
            .or_else(|| {
                lookup("HTTP_X_FORWARDED_FOR")
                    .and_then(|v| v.split(',').find_map(valid_ip))
            })
            .or_else(|| lookup("REMOTE_ADDR").and_then(|v| valid_ip(&v)));

        Self {
            ip,
            uri: lookup("REQUEST_URI").filter(|v| !v.is_empty()),
            user_agent: lookup("HTTP_USER_AGENT").filter(|v| !v.is_empty()),
        }
    }

    /// Sets the client address.
    #[must_use]
    pub fn ip(mut self, ip: impl Into<String>) -> Self {
        self.ip = Some(ip.into());
        self
    }

    /// Sets the request path.
    #[must_use]
    pub fn uri(mut self, uri: impl Into<String>) -> Self {
        self.uri = Some(uri.into());
        self
    }

    /// Sets the user agent.
    #[must_use]
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    /// Client address or [`IP_UNDEFINED`].
    #[must_use]
    pub fn ip_or_placeholder(&self) -> &str {
        self.ip.as_deref().unwrap_or(IP_UNDEFINED)
    }

    /// Request path or [`URI_UNDEFINED`].
    #[must_use]
    pub fn uri_or_placeholder(&self) -> &str {
        self.uri.as_deref().unwrap_or(URI_UNDEFINED)
    }

    /// User agent or [`USER_AGENT_UNDEFINED`].
    #[must_use]
    pub fn user_agent_or_placeholder(&self) -> &str {
        self.user_agent.as_deref().unwrap_or(USER_AGENT_UNDEFINED)
    }
}

fn valid_ip(candidate: &str) -> Option<String> {
    let trimmed = candidate.trim();
    trimmed.parse::<IpAddr>().ok().map(|_| trimmed.to_string())
}
