use super::{
    client::{Console, OutputLine, Stream, ToolExit, UpdateTool},
    invocation::Invocation,
};
use crate::error::UpdateError;
use async_trait::async_trait;
use log::{debug, warn};
use std::{io, process::Stdio};
use tokio::{
    io::{AsyncBufReadExt, AsyncRead, AsyncWriteExt, BufReader},
    process::{ChildStdin, Command},
    sync::mpsc::{self, UnboundedSender},
};

/// Runs the real nsupdate binary as a child process.
#[derive(Debug, Default, Clone, Copy)]
pub struct Nsupdate;

#[async_trait]
impl UpdateTool for Nsupdate {
    async fn submit(
        &self,
        invocation: &Invocation,
        payload: &str,
        console: &mut dyn Console,
    ) -> Result<ToolExit, UpdateError> {
        let mut child = Command::new(&invocation.program)
            .args(&invocation.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|source| UpdateError::ExternalToolUnavailable {
                path: invocation.program.clone(),
                source,
            })?;

        // Both pipes are drained at once so neither can fill up and stall
        // the child while we wait on the other.
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut readers = Vec::with_capacity(2);
        if let Some(stdout) = child.stdout.take() {
            readers.push(tokio::spawn(relay_lines(stdout, Stream::Stdout, tx.clone())));
        }
        if let Some(stderr) = child.stderr.take() {
            readers.push(tokio::spawn(relay_lines(stderr, Stream::Stderr, tx.clone())));
        }
        drop(tx);

        if let Some(stdin) = child.stdin.take() {
            write_payload(stdin, payload).await?;
        }

        while let Some(line) = rx.recv().await {
            console.emit(&line)?;
        }

        for reader in readers {
            reader.await.map_err(io::Error::other)??;
        }

        let status = child.wait().await?;
        debug!("nsupdate exited with {}", status);

        Ok(ToolExit {
            code: status.code(),
        })
    }
}

// Dropping `stdin` closes it, which ends the nsupdate session input.
async fn write_payload(mut stdin: ChildStdin, payload: &str) -> io::Result<()> {
    let written = async {
        stdin.write_all(payload.as_bytes()).await?;
        stdin.flush().await
    }
    .await;

    match written {
        Err(err) if err.kind() == io::ErrorKind::BrokenPipe => {
            warn!("nsupdate closed its input before the whole update was written");
            Ok(())
        }
        other => other,
    }
}

async fn relay_lines<R>(
    reader: R,
    stream: Stream,
    tx: UnboundedSender<OutputLine>,
) -> io::Result<()>
where
    R: AsyncRead + Unpin,
{
    let mut reader = BufReader::new(reader);
    let mut buf = Vec::new();

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf).await? == 0 {
            return Ok(());
        }

        let text = String::from_utf8_lossy(&buf)
            .trim_end_matches(['\n', '\r'])
            .to_string();

        if tx.send(OutputLine { stream, text }).is_err() {
            return Ok(());
        }
    }
}
