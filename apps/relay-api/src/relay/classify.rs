//! Handshake-time role classification.

/// The role assigned to a connection when it is accepted. Fixed for the life
/// of the connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// An alert source (sensor device). Sends alerts, receives nothing.
    Sensor,
    /// A dashboard viewer. Receives every relayed alert; anything it sends
    /// is ignored.
    Viewer,
}

/// User-Agent substrings that identify a browser-based viewer.
///
/// This is a heuristic, not authentication: any client can claim either role
/// by forging its User-Agent.
const BROWSER_MARKERS: &[&str] = &["mozilla", "chrome", "safari"];

/// Classify a connection by its handshake User-Agent string.
///
/// Total over all inputs; anything that does not look like a browser is
/// assumed to be a sensor device.
pub fn classify(user_agent: &str) -> Role {
    let user_agent = user_agent.to_ascii_lowercase();
    if BROWSER_MARKERS
        .iter()
        .any(|marker| user_agent.contains(marker))
    {
        Role::Viewer
    } else {
        Role::Sensor
    }
}
