use std::rc::Rc;

use futures::StreamExt;
use gloo_net::websocket::{futures::WebSocket, Message};
use gloo_timers::future::TimeoutFuture;
use serde_json::Value;
use wasm_bindgen_futures::spawn_local;

use super::types::ConnectionPhase;

/// Fixed delay before retrying a dropped or refused connection. Deliberately
/// flat: this is a trusted local admin tool, not a resilience layer.
const RECONNECT_DELAY_MS: u32 = 3_000;

/// Errors surfaced while consuming the update stream.
#[derive(Debug)]
pub enum FeedError {
    Decode(String),
}

pub type MessageCallback = Rc<dyn Fn(Value)>;
pub type PhaseCallback = Rc<dyn Fn(ConnectionPhase)>;

/// Open the live update stream and keep it open indefinitely: every failed
/// open, read error, or server close schedules a retry after the fixed delay.
/// The latest decoded payload goes to `on_message`, lifecycle transitions to
/// `on_phase`.
pub fn connect_with_retry(url: String, on_message: MessageCallback, on_phase: PhaseCallback) {
    spawn_local(async move {
        loop {
            on_phase(ConnectionPhase::Connecting);
            match WebSocket::open(&url) {
                // `open` returns while the browser socket is still
                // handshaking, so `Open` is reported by the read loop once
                // the server's first frame arrives.
                Ok(socket) => {
                    read_until_closed(socket, &on_message, &on_phase).await;
                    on_phase(ConnectionPhase::Closed);
                }
                Err(err) => {
                    log::error!("websocket open failed: {err:?}");
                    on_phase(ConnectionPhase::Closed);
                }
            }
            TimeoutFuture::new(RECONNECT_DELAY_MS).await;
        }
    });
}

async fn read_until_closed(
    socket: WebSocket,
    on_message: &MessageCallback,
    on_phase: &PhaseCallback,
) {
    let (_, mut read) = socket.split();
    let mut opened = false;

    while let Some(frame) = read.next().await {
        let payload = match frame {
            Ok(Message::Text(text)) => text.into_bytes(),
            Ok(Message::Bytes(bytes)) => bytes,
            Err(err) => {
                log::error!("websocket read error: {err:?}");
                break;
            }
        };

        // Any delivered frame proves the transport is open, even one that
        // fails to decode below.
        note_transport_open(&mut opened, on_phase);

        if let Err(err) = dispatch_update(&payload, on_message) {
            log::warn!("dropping malformed update: {err:?}");
        }
    }
}

fn note_transport_open(opened: &mut bool, on_phase: &PhaseCallback) {
    if !*opened {
        *opened = true;
        on_phase(ConnectionPhase::Open);
    }
}

fn dispatch_update(bytes: &[u8], on_message: &MessageCallback) -> Result<(), FeedError> {
    let value: Value =
        serde_json::from_slice(bytes).map_err(|err| FeedError::Decode(err.to_string()))?;
    on_message(value);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn dispatch_hands_over_decoded_payload() {
        let received: Rc<RefCell<Option<Value>>> = Rc::new(RefCell::new(None));
        let sink = Rc::clone(&received);
        let on_message: MessageCallback = Rc::new(move |value| {
            *sink.borrow_mut() = Some(value);
        });

        dispatch_update(br#"{"type":"heartbeat","data":{}}"#, &on_message).expect("valid json");
        let value = received.borrow().clone().expect("callback invoked");
        assert_eq!(value["type"], "heartbeat");
    }

    #[test]
    fn dispatch_rejects_malformed_payload() {
        let on_message: MessageCallback = Rc::new(|_| panic!("must not be called"));
        let err = dispatch_update(b"not json", &on_message).expect_err("malformed");
        assert!(matches!(err, FeedError::Decode(_)));
    }

    #[test]
    fn open_is_reported_once_and_only_after_a_frame() {
        let phases: Rc<RefCell<Vec<ConnectionPhase>>> = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&phases);
        let on_phase: PhaseCallback = Rc::new(move |phase| {
            sink.borrow_mut().push(phase);
        });

        // Nothing delivered yet: the connection must still read as pending.
        let mut opened = false;
        assert!(phases.borrow().is_empty());

        note_transport_open(&mut opened, &on_phase);
        note_transport_open(&mut opened, &on_phase);
        assert_eq!(*phases.borrow(), vec![ConnectionPhase::Open]);
    }
}
