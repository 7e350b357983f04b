//! Event loop that interleaves the scheduled alert with on-demand commands.

use std::sync::Arc;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::info;

use crate::core::scheduler::AlertScheduler;
use crate::jobs::commands::CommandHandler;
use crate::jobs::context::AppContext;

pub struct AlertRuntime {
    scheduler: AlertScheduler,
    handler: CommandHandler,
}

impl AlertRuntime {
    pub fn new(ctx: Arc<AppContext>, scheduler: AlertScheduler) -> Self {
        Self {
            scheduler,
            handler: CommandHandler::new(ctx),
        }
    }

    pub fn scheduler(&self) -> &AlertScheduler {
        &self.scheduler
    }

    /// Answer commands read line by line until the reader is exhausted.
    /// Lines that are not commands are ignored.
    pub async fn serve_commands<R, W>(&self, reader: R, mut writer: W) -> std::io::Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut lines = reader.lines();
        while let Some(line) = lines.next_line().await? {
            if let Some(reply) = self.handler.handle_line(&line).await {
                writer.write_all(reply.as_bytes()).await?;
                writer.write_all(b"\n").await?;
                writer.flush().await?;
            }
        }
        Ok(())
    }

    /// Start the scheduler and serve commands until Ctrl-C. The scheduler
    /// keeps running after the command input is closed.
    pub async fn run<R, W>(&self, reader: R, writer: W) -> std::io::Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        self.scheduler.start().await;

        let commands = async {
            self.serve_commands(reader, writer).await?;
            info!("Command input closed, scheduler keeps running");
            std::future::pending::<std::io::Result<()>>().await
        };

        let result = tokio::select! {
            served = commands => served,
            signal = tokio::signal::ctrl_c() => {
                info!("Shutting down...");
                signal
            }
        };

        self.scheduler.stop().await;
        result
    }
}
