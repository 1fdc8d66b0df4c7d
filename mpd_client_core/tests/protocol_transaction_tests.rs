//! Transaction engine integration tests
//!
//! These drive `MpdClient::transact` end to end over scripted transports:
//! reply classification, the ACK error path, and the bounded
//! reconnect-and-retry cycle on closed connections.

use std::io;
use std::sync::atomic::Ordering;

use mpd_client_core::protocol::{Command, ProtocolError, Reply, ResponseShape};
use mpd_client_core::{ClientConfig, MpdClient};
use mpd_test_utils::{ReplyBuilder, ScriptedConnector, ScriptedTransport};

fn config() -> ClientConfig {
    ClientConfig::default()
}

#[tokio::test]
async fn test_status_transaction_parses_map_and_excludes_terminator() {
    let transport = ScriptedTransport::new()
        .reads_lines(ReplyBuilder::greeting().pair("volume", "80").pair("repeat", "0").ok());
    let writes = transport.writes();
    let connector = ScriptedConnector::new(vec![transport]);

    let mut client = MpdClient::connect_with(Box::new(connector), &config())
        .await
        .unwrap();
    let status = client.status().await.unwrap();

    assert_eq!(status.get("volume").map(String::as_str), Some("80"));
    assert_eq!(status.get("repeat").map(String::as_str), Some("0"));
    assert_eq!(status.len(), 2, "the OK terminator must not reach the parser");
    assert_eq!(writes.lock().unwrap().as_slice(), ["status\r\n"]);
}

#[tokio::test]
async fn test_ack_reply_surfaces_verbatim_regardless_of_shape() {
    let ack_line = "ACK [50@0] {play} Bad song index";
    for shape in [
        ResponseShape::Line,
        ResponseShape::List,
        ResponseShape::Map,
        ResponseShape::RecordList,
    ] {
        let transport = ScriptedTransport::new()
            .reads_lines(ReplyBuilder::greeting().line(ack_line).unterminated());
        let connector = ScriptedConnector::new(vec![transport]);

        let mut client = MpdClient::connect_with(Box::new(connector), &config())
            .await
            .unwrap();
        let err = client
            .transact(&Command::new("play").arg(99), shape)
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), ack_line);
        match err {
            ProtocolError::Server(ack) => {
                assert_eq!(ack.code(), Some(50));
                assert_eq!(ack.command(), Some("play"));
                assert_eq!(ack.message(), "Bad song index");
            }
            other => panic!("expected Server error, got {other:?}"),
        }
    }
}

#[tokio::test]
async fn test_closed_on_write_reconnects_and_resends_once() {
    // First transport: greeting consumed at connect, then the write fails
    // with a closed connection
    let first = ScriptedTransport::new()
        .reads(&["OK MPD 0.23.5"])
        .write_closed();
    let first_writes = first.writes();

    // Second transport: fresh greeting, then the retried command succeeds
    let second = ScriptedTransport::new()
        .reads_lines(ReplyBuilder::greeting().pair("volume", "80").ok());
    let second_writes = second.writes();

    let connector = ScriptedConnector::new(vec![first, second]);
    let connects = connector.connect_count();

    let mut client = MpdClient::connect_with(Box::new(connector), &config())
        .await
        .unwrap();
    let status = client.status().await.unwrap();

    assert_eq!(status.get("volume").map(String::as_str), Some("80"));
    assert_eq!(connects.load(Ordering::SeqCst), 2);
    assert!(first_writes.lock().unwrap().is_empty());
    assert_eq!(second_writes.lock().unwrap().as_slice(), ["status\r\n"]);
}

#[tokio::test]
async fn test_closed_during_read_retries_whole_transaction() {
    // The reply dies mid-body; the retry must resend the command from
    // scratch, not resume reading
    let first = ScriptedTransport::new()
        .reads_lines(ReplyBuilder::greeting().pair("volume", "80").unterminated());
    let second = ScriptedTransport::new().reads_lines(
        ReplyBuilder::greeting()
            .pair("volume", "80")
            .pair("repeat", "1")
            .ok(),
    );
    let second_writes = second.writes();
    let connector = ScriptedConnector::new(vec![first, second]);
    let connects = connector.connect_count();

    let mut client = MpdClient::connect_with(Box::new(connector), &config())
        .await
        .unwrap();
    let status = client.status().await.unwrap();

    assert_eq!(connects.load(Ordering::SeqCst), 2);
    assert_eq!(status.len(), 2);
    assert_eq!(second_writes.lock().unwrap().as_slice(), ["status\r\n"]);
}

#[tokio::test]
async fn test_second_consecutive_close_propagates_without_third_connect() {
    let first = ScriptedTransport::new().reads(&["OK MPD 0.23.5"]).write_closed();
    let second = ScriptedTransport::new().reads(&["OK MPD 0.23.5"]).write_closed();
    let third = ScriptedTransport::new().reads(&["OK MPD 0.23.5"]);
    let connector = ScriptedConnector::new(vec![first, second, third]);
    let connects = connector.connect_count();

    let mut client = MpdClient::connect_with(Box::new(connector), &config())
        .await
        .unwrap();
    let err = client.status().await.unwrap_err();

    assert!(err.is_closed(), "second close must surface, got {err:?}");
    assert_eq!(
        connects.load(Ordering::SeqCst),
        2,
        "at most one reconnect per transaction"
    );
}

#[tokio::test]
async fn test_reconnect_disabled_surfaces_close_immediately() {
    let first = ScriptedTransport::new().reads(&["OK MPD 0.23.5"]).write_closed();
    let second = ScriptedTransport::new().reads(&["OK MPD 0.23.5"]);
    let connector = ScriptedConnector::new(vec![first, second]);
    let connects = connector.connect_count();

    let mut client = MpdClient::connect_with(Box::new(connector), &config().without_reconnect())
        .await
        .unwrap();
    let err = client.status().await.unwrap_err();

    assert!(err.is_closed());
    assert_eq!(connects.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_reconnect_failure_is_reported_as_reconnect_error() {
    // Only one scripted transport: the reconnect attempt finds none
    let first = ScriptedTransport::new().reads(&["OK MPD 0.23.5"]).write_closed();
    let connector = ScriptedConnector::new(vec![first]);

    let mut client = MpdClient::connect_with(Box::new(connector), &config())
        .await
        .unwrap();
    let err = client.status().await.unwrap_err();

    assert!(matches!(err, ProtocolError::Reconnect(_)));
}

#[tokio::test]
async fn test_server_rejection_is_never_retried() {
    let transport = ScriptedTransport::new()
        .reads_lines(ReplyBuilder::greeting().ack(50, "play", "Bad song index"));
    let connector = ScriptedConnector::new(vec![transport]);
    let connects = connector.connect_count();

    let mut client = MpdClient::connect_with(Box::new(connector), &config())
        .await
        .unwrap();
    let err = client.play(Some(99)).await.unwrap_err();

    assert!(matches!(err, ProtocolError::Server(_)));
    assert_eq!(connects.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_non_closed_read_error_surfaces_without_reconnect() {
    let transport = ScriptedTransport::new()
        .reads(&["OK MPD 0.23.5"])
        .read_error(io::ErrorKind::TimedOut);
    let connector = ScriptedConnector::new(vec![transport]);
    let connects = connector.connect_count();

    let mut client = MpdClient::connect_with(Box::new(connector), &config())
        .await
        .unwrap();
    let err = client.status().await.unwrap_err();

    assert!(matches!(err, ProtocolError::Io(_)));
    assert_eq!(connects.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_record_list_transaction() {
    let transport = ScriptedTransport::new().reads_lines(
        ReplyBuilder::greeting()
            .song("a.mp3", 5)
            .song("b.mp3", 7)
            .ok(),
    );
    let connector = ScriptedConnector::new(vec![transport]);

    let mut client = MpdClient::connect_with(Box::new(connector), &config())
        .await
        .unwrap();
    let songs = client.playlistinfo(None).await.unwrap();

    assert_eq!(songs.len(), 2);
    assert_eq!(songs[0].get("file").map(String::as_str), Some("a.mp3"));
    assert_eq!(songs[1].get("Time").map(String::as_str), Some("7"));
}

#[tokio::test]
async fn test_idle_is_an_ordinary_transaction() {
    // The blocking wait-for-change is a normal transact call: one write,
    // reply lines until OK, no background listener
    let transport = ScriptedTransport::new().reads_lines(
        ReplyBuilder::greeting()
            .pair("changed", "player")
            .pair("changed", "mixer")
            .ok(),
    );
    let writes = transport.writes();
    let connector = ScriptedConnector::new(vec![transport]);

    let mut client = MpdClient::connect_with(Box::new(connector), &config())
        .await
        .unwrap();
    let changed = client.idle(&["player", "mixer"]).await.unwrap();

    assert_eq!(changed, ["player", "mixer"]);
    assert_eq!(writes.lock().unwrap().as_slice(), ["idle player mixer\r\n"]);
}

#[tokio::test]
async fn test_raw_transact_line_shape() {
    let transport = ScriptedTransport::new()
        .reads_lines(ReplyBuilder::greeting().line("binary junk").line("more").ok());
    let connector = ScriptedConnector::new(vec![transport]);

    let mut client = MpdClient::connect_with(Box::new(connector), &config())
        .await
        .unwrap();
    let reply = client
        .transact(&Command::new("ping"), ResponseShape::Line)
        .await
        .unwrap();

    assert_eq!(reply, Reply::Text("binary junk\nmore".to_string()));
}

#[tokio::test]
async fn test_close_sends_command_without_reading_reply() {
    let transport = ScriptedTransport::new().reads(&["OK MPD 0.23.5"]);
    let writes = transport.writes();
    let connector = ScriptedConnector::new(vec![transport]);

    let client = MpdClient::connect_with(Box::new(connector), &config())
        .await
        .unwrap();
    client.close().await.unwrap();

    assert_eq!(writes.lock().unwrap().as_slice(), ["close\r\n"]);
}
