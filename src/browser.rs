use crate::error::AlmanacError;
use std::{
    net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr},
    process::{Command, Stdio},
};
use url::Url;

/// URL the UI is reachable at for a local browser.
///
/// An unspecified bind address (`0.0.0.0` / `::`) is not browsable, so it is swapped for the
/// matching loopback address.
pub fn ui_url(addr: SocketAddr) -> Result<Url, url::ParseError> {
    let ip = match addr.ip() {
        IpAddr::V4(ip) if ip.is_unspecified() => IpAddr::V4(Ipv4Addr::LOCALHOST),
        IpAddr::V6(ip) if ip.is_unspecified() => IpAddr::V6(Ipv6Addr::LOCALHOST),
        ip => ip,
    };
    Url::parse(&format!("http://{}/", SocketAddr::new(ip, addr.port())))
}

#[cfg(target_os = "macos")]
fn launcher() -> (&'static str, &'static [&'static str]) {
    ("open", &[])
}

#[cfg(windows)]
fn launcher() -> (&'static str, &'static [&'static str]) {
    ("cmd", &["/C", "start", ""])
}

#[cfg(all(unix, not(target_os = "macos")))]
fn launcher() -> (&'static str, &'static [&'static str]) {
    ("xdg-open", &[])
}

/// Hands `url` to the platform's default browser launcher without waiting on it.
pub fn open_in_browser(url: &Url) -> Result<(), AlmanacError> {
    let (program, args) = launcher();
    Command::new(program)
        .args(args)
        .arg(url.as_str())
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()?;
    Ok(())
}
