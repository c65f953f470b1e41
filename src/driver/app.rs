//! Application Composition
//!
//! 依存関係の組み立てとコマンドの実行

use anyhow::Result;
use log::info;
use std::io::Write;
use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};

use crate::adapter::config::Config;
use crate::adapter::repositories::{InMemoryUserRepository, JsonUserRepository};
use crate::application::commands::{UserDeleteCommand, UserRegisterCommand, UserUpdateCommand};
use crate::application::services::UserApplicationService;
use crate::domain::error::{DomainError, DomainResult};
use crate::domain::repositories::UserRepository;
use crate::domain::services::UserService;

use super::cli::Command;
use super::shell::{parse_line, ShellInput, SHELL_HELP};

/// User registry application
pub struct UserRegistryApp {
    service: UserApplicationService<dyn UserRepository>,
}

impl UserRegistryApp {
    /// Create the application, choosing the repository from the config
    pub fn new(config: &Config) -> Self {
        let repository: Arc<dyn UserRepository> = match &config.store_path {
            Some(path) => {
                info!("Using JSON user store: {}", path);
                Arc::new(JsonUserRepository::new(path))
            }
            None => {
                info!("Using in-memory user store");
                Arc::new(InMemoryUserRepository::new())
            }
        };

        Self::with_repository(repository)
    }

    /// Create the application on top of an existing repository
    pub fn with_repository(repository: Arc<dyn UserRepository>) -> Self {
        let user_service = Arc::new(UserService::new(repository.clone()));
        let service = UserApplicationService::new(user_service, repository);

        Self { service }
    }

    /// Execute a single command, writing its result to `out`
    ///
    /// `Command::Shell` reads further commands from stdin until EOF or `exit`.
    pub async fn execute<W: Write>(&self, command: Command, out: &mut W) -> Result<()> {
        if command == Command::Shell {
            let stdin = BufReader::new(tokio::io::stdin());
            return self.run_shell(stdin, out).await;
        }

        let message = self.dispatch(command).await?;
        writeln!(out, "{}", message)?;

        Ok(())
    }

    /// Run the interactive loop
    ///
    /// Domain errors are reported and the loop continues. I/O errors end it.
    pub async fn run_shell<R, W>(&self, input: R, out: &mut W) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: Write,
    {
        let mut lines = input.lines();

        writeln!(out, "Input a command (type 'help' for usage)")?;
        loop {
            write!(out, "> ")?;
            out.flush()?;

            let Some(line) = lines.next_line().await? else {
                break;
            };
            if line.trim().is_empty() {
                continue;
            }

            match parse_line(&line) {
                Ok(ShellInput::Exit) => break,
                Ok(ShellInput::Help) => writeln!(out, "{}", SHELL_HELP)?,
                Ok(ShellInput::Run(command)) => match self.dispatch(command).await {
                    Ok(message) => writeln!(out, "{}", message)?,
                    Err(e) => writeln!(out, "error: {}", e)?,
                },
                Err(message) => writeln!(out, "{}", message)?,
            }
        }

        info!("Shell finished");
        Ok(())
    }

    async fn dispatch(&self, command: Command) -> DomainResult<String> {
        match command {
            Command::Register {
                id,
                name,
                mail_address,
            } => {
                let command = UserRegisterCommand::new(id.clone(), Some(name), mail_address);
                self.service.register(command).await?;
                Ok(format!("registered: {}", id))
            }
            Command::Get { id } => {
                let message = match self.service.get(&id).await? {
                    Some(user) => format!("id: {}, name: {}", user.id(), user.name()),
                    None => format!("user not found: {}", id),
                };
                Ok(message)
            }
            Command::Update { id, name } => {
                self.service
                    .update(UserUpdateCommand::new(id.clone(), name))
                    .await?;
                Ok(format!("updated: {}", id))
            }
            Command::Delete { id } => {
                self.service
                    .delete(UserDeleteCommand::new(id.clone()))
                    .await?;
                Ok(format!("deleted: {}", id))
            }
            Command::Shell => Err(DomainError::invalid_input(
                "command",
                "shell cannot be started from inside the shell",
            )),
        }
    }
}
