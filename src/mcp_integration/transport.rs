//! Newline-delimited stdio transport in front of the rmcp service.
//!
//! rmcp ends a session on the first frame it cannot decode. Clients send
//! stray or malformed lines often enough that one bad line must not cost the
//! whole session, so every input line is screened before it reaches rmcp:
//!
//! ```text
//! stdin ──▶ screen_input ──▶ duplex pipe ──▶ rmcp service
//!               │                                 │
//!               ▼ error replies                   ▼ replies
//!           frame queue ◀──── forward_frames ◀────┘
//!               │
//!               ▼
//!            stdout
//! ```
//!
//! A line that cannot be served gets its JSON-RPC error reply straight from
//! the screener (`-32700` for undecodable input, `-32600`, `-32601` or
//! `-32602` for requests rmcp would not accept) and reading continues.
//! Replies are matched to requests by id, not by order.

use super::core::OktaMcpServer;
use crate::error::{ServeError, ServeResult, ToolError, ValidationError};
use crate::okta::IdentityApi;
use log::{debug, info, warn};
use rmcp::ServiceExt;
use rmcp::model::{ErrorCode, ErrorData};
use serde_json::{Map, Value, json};
use std::io;
use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncWrite, AsyncWriteExt, BufReader};
use tokio::sync::mpsc;

const PIPE_CAPACITY: usize = 64 * 1024;
const FRAME_QUEUE: usize = 64;

/// Requests the server answers
const REQUEST_METHODS: &[&str] = &["initialize", "ping", "tools/list", "tools/call"];

/// Notifications passed on to the session; any other notification is dropped
const NOTIFICATION_METHODS: &[&str] = &[
    "notifications/initialized",
    "notifications/cancelled",
    "notifications/progress",
    "notifications/roots/list_changed",
];

/// What to do with one line of input
#[derive(Debug, PartialEq)]
pub enum Screened<'a> {
    /// Hand the message to the MCP session unchanged
    Forward(&'a [u8]),
    /// Answer directly with this JSON-RPC error response
    Reply(Value),
    /// Nothing to do
    Skip,
}

/// Decide whether a raw input line can be served by the MCP session.
pub fn screen_line(line: &[u8]) -> Screened<'_> {
    let line = line.trim_ascii();
    if line.is_empty() {
        return Screened::Skip;
    }

    let message = match serde_json::from_slice::<Value>(line) {
        Ok(message) => message,
        Err(err) => {
            warn!("Discarding unparsable message: {}", err);
            return Screened::Reply(error_response(
                Value::Null,
                ErrorCode::PARSE_ERROR,
                format!("Parse error: {}", err),
                None,
            ));
        }
    };

    let Value::Object(fields) = message else {
        return invalid_request(Value::Null, "expected a JSON object");
    };

    let id = match fields.get("id") {
        None => None,
        Some(id @ Value::String(_)) => Some(id.clone()),
        Some(id @ Value::Number(number)) if number.is_i64() => Some(id.clone()),
        Some(_) => return invalid_request(Value::Null, "id must be a string or an integer"),
    };

    if fields.get("jsonrpc").and_then(Value::as_str) != Some("2.0") {
        return invalid_request(id.unwrap_or(Value::Null), "jsonrpc must be \"2.0\"");
    }

    let Some(method) = fields.get("method") else {
        // The server issues no requests, so replies from the client are not expected.
        return match id {
            Some(id) if !fields.contains_key("result") && !fields.contains_key("error") => {
                invalid_request(id, "missing method")
            }
            _ => Screened::Skip,
        };
    };

    let Some(method) = method.as_str() else {
        return match id {
            Some(id) => invalid_request(id, "method must be a string"),
            None => Screened::Skip,
        };
    };

    let Some(id) = id else {
        if NOTIFICATION_METHODS.contains(&method) {
            return Screened::Forward(line);
        }
        debug!("Ignoring notification: {}", method);
        return Screened::Skip;
    };

    if !REQUEST_METHODS.contains(&method) {
        return Screened::Reply(error_response(
            id,
            ErrorCode::METHOD_NOT_FOUND,
            format!("Method not found: {}", method),
            None,
        ));
    }

    let params = match fields.get("params") {
        None | Some(Value::Null) => None,
        Some(Value::Object(params)) => Some(params),
        Some(_) => return invalid_params(id, "params must be an object", None),
    };

    match check_params(method, params) {
        Ok(()) => Screened::Forward(line),
        Err((message, data)) => invalid_params(id, &message, data),
    }
}

type ParamsProblem = (String, Option<Value>);

fn check_params(method: &str, params: Option<&Map<String, Value>>) -> Result<(), ParamsProblem> {
    let field = |name: &str| params.and_then(|params| params.get(name));
    let problem =
        |message: &str| -> Result<(), ParamsProblem> { Err((message.to_string(), None)) };

    match method {
        "initialize" => {
            if field("protocolVersion").and_then(Value::as_str).is_none() {
                return problem("initialize requires a protocolVersion string");
            }
            if !field("capabilities").is_some_and(Value::is_object) {
                return problem("initialize requires a capabilities object");
            }
            let client = field("clientInfo");
            let named = |key: &str| {
                client
                    .and_then(|info| info.get(key))
                    .is_some_and(Value::is_string)
            };
            if !named("name") || !named("version") {
                return problem("initialize requires clientInfo with name and version");
            }
        }
        "tools/list" => {
            if field("cursor").is_some_and(|cursor| !cursor.is_null() && !cursor.is_string()) {
                return problem("cursor must be a string");
            }
        }
        "tools/call" => {
            if field("name").and_then(Value::as_str).is_none() {
                return problem("Missing tool name");
            }
            if field("arguments").is_some_and(|args| !args.is_null() && !args.is_object()) {
                let err = ToolError::from(ValidationError::invalid_type("arguments", "object"));
                return Err((err.to_string(), Some(json!({ "field": "arguments" }))));
            }
        }
        _ => {}
    }
    Ok(())
}

fn invalid_request(id: Value, reason: &str) -> Screened<'static> {
    Screened::Reply(error_response(
        id,
        ErrorCode::INVALID_REQUEST,
        format!("Invalid request: {}", reason),
        None,
    ))
}

fn invalid_params(id: Value, message: &str, data: Option<Value>) -> Screened<'static> {
    Screened::Reply(error_response(
        id,
        ErrorCode::INVALID_PARAMS,
        message.to_string(),
        data,
    ))
}

fn error_response(id: Value, code: ErrorCode, message: String, data: Option<Value>) -> Value {
    let error = ErrorData::new(code, message, data);
    json!({ "jsonrpc": "2.0", "id": id, "error": error })
}

impl<A: IdentityApi + 'static> OktaMcpServer<A> {
    /// Serve MCP over newline-delimited JSON read from `reader`, writing
    /// replies to `writer`.
    ///
    /// Returns when the input ends or the client breaks the session.
    pub async fn serve_lines<R, W>(self, reader: R, writer: W) -> ServeResult<()>
    where
        R: AsyncRead + Unpin + Send + 'static,
        W: AsyncWrite + Unpin + Send + 'static,
    {
        let (session_io, bridge_io) = tokio::io::duplex(PIPE_CAPACITY);
        let (from_session, to_session) = tokio::io::split(bridge_io);
        let (frames, outgoing) = mpsc::channel::<Vec<u8>>(FRAME_QUEUE);

        let writer_task = tokio::spawn(write_frames(writer, outgoing));
        let forwarder = tokio::spawn(forward_frames(from_session, frames.clone()));
        let screener = tokio::spawn(screen_input(reader, to_session, frames));

        let outcome = match self.serve(session_io).await {
            Ok(service) => service
                .waiting()
                .await
                .map(|reason| debug!("MCP session ended: {:?}", reason))
                .map_err(|err| ServeError::Task {
                    reason: err.to_string(),
                }),
            Err(err) => Err(ServeError::Initialize {
                reason: err.to_string(),
            }),
        };

        screener.abort();
        let screened = match screener.await {
            Ok(result) => result.map_err(ServeError::from),
            Err(err) if err.is_cancelled() => Ok(()),
            Err(err) => Err(task_failed(err)),
        };
        let forwarded = forwarder.await.map_err(task_failed)?;
        let written = writer_task.await.map_err(task_failed)?;

        outcome?;
        screened?;
        forwarded?;
        written?;
        Ok(())
    }

    /// Run the MCP server using stdio communication
    ///
    /// Reads newline-delimited JSON-RPC messages from stdin and writes
    /// replies to stdout until stdin is closed. Logging must go to stderr.
    pub async fn run_stdio(self) -> ServeResult<()> {
        info!("Okta MCP server ready for stdio communication");
        info!(
            "Available tools: {:?}",
            self.get_tools()
                .iter()
                .map(|tool| tool.name.to_string())
                .collect::<Vec<_>>()
        );

        self.serve_lines(tokio::io::stdin(), tokio::io::stdout())
            .await?;

        info!("stdin closed, shutting down");
        Ok(())
    }
}

fn task_failed(err: tokio::task::JoinError) -> ServeError {
    ServeError::Task {
        reason: err.to_string(),
    }
}

fn encode_frame(message: &Value) -> Vec<u8> {
    let mut frame = message.to_string().into_bytes();
    frame.push(b'\n');
    frame
}

async fn screen_input<R, W>(
    reader: R,
    mut session: W,
    replies: mpsc::Sender<Vec<u8>>,
) -> io::Result<()>
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let screened = screen_lines(BufReader::new(reader), &mut session, &replies).await;
    // End of input must reach the session even when reading failed.
    let closed = session.shutdown().await;
    screened.and(closed)
}

async fn screen_lines<R, W>(
    mut reader: BufReader<R>,
    session: &mut W,
    replies: &mpsc::Sender<Vec<u8>>,
) -> io::Result<()>
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut line = Vec::new();
    loop {
        line.clear();
        if reader.read_until(b'\n', &mut line).await? == 0 {
            return Ok(());
        }

        match screen_line(&line) {
            Screened::Forward(message) => {
                session.write_all(message).await?;
                session.write_all(b"\n").await?;
                session.flush().await?;
            }
            Screened::Reply(reply) => {
                if replies.send(encode_frame(&reply)).await.is_err() {
                    return Ok(());
                }
            }
            Screened::Skip => {}
        }
    }
}

async fn forward_frames<R>(session: R, frames: mpsc::Sender<Vec<u8>>) -> io::Result<()>
where
    R: AsyncRead + Unpin,
{
    let mut session = BufReader::new(session);
    loop {
        let mut frame = Vec::new();
        if session.read_until(b'\n', &mut frame).await? == 0 {
            return Ok(());
        }
        if !frame.ends_with(b"\n") {
            frame.push(b'\n');
        }
        if frames.send(frame).await.is_err() {
            return Ok(());
        }
    }
}

async fn write_frames<W>(mut writer: W, mut frames: mpsc::Receiver<Vec<u8>>) -> io::Result<()>
where
    W: AsyncWrite + Unpin,
{
    while let Some(frame) = frames.recv().await {
        writer.write_all(&frame).await?;
        writer.flush().await?;
    }
    Ok(())
}
