//! Configuration utilities (port, static dir, room id length)

use std::{env, net::{Ipv4Addr, SocketAddr}};
use std::path::PathBuf;

use crate::util::id::{DEFAULT_ROOM_ID_LEN, MAX_ROOM_ID_LEN};

const DEFAULT_PORT: u16 = 8080;

/// Listen on every interface, port from `PORT`.
pub fn server_addr() -> SocketAddr {
    SocketAddr::from((Ipv4Addr::UNSPECIFIED, parse_port(env::var("PORT").ok().as_deref())))
}

fn parse_port(raw: Option<&str>) -> u16 {
    raw.and_then(|v| v.trim().parse::<u16>().ok())
        .filter(|&p| p != 0)
        .unwrap_or(DEFAULT_PORT)
}

/// Directory served under `/static`. `STATIC_DIR` or `./static`.
pub fn static_dir() -> PathBuf {
    env::var("STATIC_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("./static"))
}

/// Length of generated default room ids, from `ROOM_ID_LENGTH`.
pub fn room_id_length() -> usize {
    parse_room_id_length(env::var("ROOM_ID_LENGTH").ok().as_deref())
}

fn parse_room_id_length(raw: Option<&str>) -> usize {
    raw.and_then(|v| v.trim().parse::<usize>().ok())
        .filter(|n| (1..=MAX_ROOM_ID_LEN).contains(n))
        .unwrap_or(DEFAULT_ROOM_ID_LEN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn port_falls_back_to_default() {
        assert_eq!(parse_port(None), 8080);
        assert_eq!(parse_port(Some("http")), 8080);
        assert_eq!(parse_port(Some("0")), 8080);
        assert_eq!(parse_port(Some("70000")), 8080);
        assert_eq!(parse_port(Some(" 3000 ")), 3000);
    }

    #[test]
    fn room_id_length_defaults_to_eight() {
        assert_eq!(parse_room_id_length(None), 8);
    }

    #[test]
    fn room_id_length_reads_valid_values() {
        assert_eq!(parse_room_id_length(Some("12")), 12);
        assert_eq!(parse_room_id_length(Some(" 4 ")), 4);
    }

    #[test]
    fn room_id_length_ignores_out_of_range() {
        assert_eq!(parse_room_id_length(Some("0")), DEFAULT_ROOM_ID_LEN);
        assert_eq!(parse_room_id_length(Some("65")), DEFAULT_ROOM_ID_LEN);
        assert_eq!(parse_room_id_length(Some("-3")), DEFAULT_ROOM_ID_LEN);
        assert_eq!(parse_room_id_length(Some("eight")), DEFAULT_ROOM_ID_LEN);
    }
}
