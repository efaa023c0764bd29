use std::io;

use futures::{AsyncBufRead, AsyncBufReadExt, Stream, StreamExt};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

/// One line read from one container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogLine {
    pub namespace: String,
    pub pod: String,
    pub container: String,
    pub message: String,
}

impl LogLine {
    /// The `pod/container` key used to group, align and color lines.
    pub fn origin_key(&self) -> String {
        format!("{}/{}", self.pod, self.container)
    }
}

/// Which container a reader is attached to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogOrigin {
    pub namespace: String,
    pub pod: String,
    pub container: String,
}

impl LogOrigin {
    pub fn line(&self, message: String) -> LogLine {
        LogLine {
            namespace: self.namespace.clone(),
            pod: self.pod.clone(),
            container: self.container.clone(),
            message,
        }
    }
}

/// What to stream.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogQuery {
    pub namespace: String,
    pub pod: Option<String>,
    pub container: Option<String>,
    pub tail_lines: Option<i64>,
    pub timestamps: bool,
}

pub type LogSender = mpsc::UnboundedSender<LogLine>;
pub type LogReceiver = mpsc::UnboundedReceiver<LogLine>;

pub fn channel() -> (LogSender, LogReceiver) {
    mpsc::unbounded_channel()
}

/// Splits `reader` on `\n`, dropping the line terminator (`\n` or `\r\n`).
/// Invalid UTF-8 is replaced rather than treated as a read error, so one
/// bad byte costs a character, not the rest of the stream.
pub fn lossy_lines<R>(reader: R) -> impl Stream<Item = io::Result<String>> + Send + 'static
where
    R: AsyncBufRead + Send + 'static,
{
    futures::stream::unfold((Box::pin(reader), Vec::new()), |(mut reader, mut buf)| async move {
        buf.clear();
        match reader.read_until(b'\n', &mut buf).await {
            Ok(0) => None,
            Ok(_) => {
                if buf.last() == Some(&b'\n') {
                    buf.pop();
                    if buf.last() == Some(&b'\r') {
                        buf.pop();
                    }
                }
                let line = String::from_utf8_lossy(&buf).into_owned();
                Some((Ok(line), (reader, buf)))
            }
            Err(e) => Some((Err(e), (reader, buf))),
        }
    })
}

/// Spawns a task that forwards every line of `lines` into `tx` until the
/// stream ends, a read fails, the receiver is gone or `cancel` fires.
/// Lines from one origin keep their order.
pub fn spawn_reader<S>(origin: LogOrigin, lines: S, tx: LogSender, cancel: CancellationToken) -> JoinHandle<()>
where
    S: Stream<Item = io::Result<String>> + Send + 'static,
{
    tokio::spawn(async move {
        let mut lines = Box::pin(lines);
        loop {
            tokio::select! {
                _ = cancel.cancelled() => {
                    debug!(pod = %origin.pod, container = %origin.container, "log reader cancelled");
                    return;
                }
                next = lines.next() => match next {
                    Some(Ok(message)) => {
                        if tx.send(origin.line(message)).is_err() {
                            return;
                        }
                    }
                    Some(Err(e)) => {
                        warn!(pod = %origin.pod, container = %origin.container, "log stream read error: {e}");
                        return;
                    }
                    None => {
                        debug!(pod = %origin.pod, container = %origin.container, "log stream closed");
                        return;
                    }
                }
            }
        }
    })
}

/// Drains `rx` into `on_line` until every sender is dropped or `cancel`
/// fires. Returns the number of lines delivered.
pub async fn drain<F>(mut rx: LogReceiver, cancel: CancellationToken, mut on_line: F) -> io::Result<usize>
where
    F: FnMut(LogLine) -> io::Result<()>,
{
    let mut delivered = 0;
    loop {
        tokio::select! {
            _ = cancel.cancelled() => break,
            next = rx.recv() => match next {
                Some(line) => {
                    on_line(line)?;
                    delivered += 1;
                }
                None => break,
            }
        }
    }
    Ok(delivered)
}
