//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, OutputFormat};
use crate::config::{AppConfig, DisplayConfig};
use crate::error::{Error, Result};
use crate::fetch::{BreweryFetcher, OpenBreweryClient};
use crate::pagination::Page;
use crate::render::{JsonRenderer, Renderer, TextRenderer};
use crate::session::{Command, Flow, Session};
use crate::types::Brewery;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tracing::{debug, info, warn};

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command against stdin/stdout
    pub async fn run(&self) -> Result<()> {
        let config = self.load_config()?;
        let fetcher = OpenBreweryClient::new(&config.api)?;
        let mut session = Session::new(fetcher, config.display.clone());
        let mut renderer = self.renderer(&config.display);

        let stdin = BufReader::new(tokio::io::stdin());
        self.execute(&mut session, renderer.as_mut(), stdin).await
    }

    /// Load the configuration file (if any) and apply command-line overrides
    pub fn load_config(&self) -> Result<AppConfig> {
        let mut config = match &self.cli.config {
            Some(path) => {
                info!(path = %path.display(), "Loading configuration");
                AppConfig::from_file(path)?
            }
            None => AppConfig::default(),
        };

        if let Some(base_url) = &self.cli.base_url {
            config.api.base_url.clone_from(base_url);
        }
        if let Some(page_size) = self.cli.page_size {
            config.display.page_size = page_size;
        }

        config.validate()?;
        Ok(config)
    }

    fn renderer(&self, display: &DisplayConfig) -> Box<dyn Renderer> {
        match self.cli.format {
            OutputFormat::Pretty => Box::new(TextRenderer::new(std::io::stdout(), display.clone())),
            OutputFormat::Json => Box::new(JsonRenderer::new(std::io::stdout())),
        }
    }

    /// Execute the parsed command with an existing session
    ///
    /// `input` is only read by `browse`.
    pub async fn execute<F, R>(
        &self,
        session: &mut Session<F>,
        renderer: &mut dyn Renderer,
        input: R,
    ) -> Result<()>
    where
        F: BreweryFetcher,
        R: AsyncBufRead + Unpin,
    {
        match &self.cli.command {
            Commands::Search { query, page } => {
                let term = query.join(" ");
                self.one_shot(session, Command::Search(term), *page, renderer)
                    .await
            }
            Commands::Random { size, page } => {
                self.one_shot(session, Command::Random(*size), *page, renderer)
                    .await
            }
            Commands::Show { id } => {
                session
                    .dispatch(Command::SelectItem(id.clone()), &mut Quiet)
                    .await?;
                match session.selected() {
                    Some(brewery) => renderer.detail(brewery),
                    None => Err(Error::not_found(id.clone())),
                }
            }
            Commands::Browse { query, random } => {
                let initial = match (query, random) {
                    (Some(term), _) => Some(Command::Search(term.clone())),
                    (None, true) => Some(Command::Random(None)),
                    (None, false) => None,
                };
                self.browse(session, renderer, initial, input).await
            }
        }
    }

    /// Fetch a result set, move to `page` and draw only that page
    async fn one_shot<F: BreweryFetcher>(
        &self,
        session: &mut Session<F>,
        command: Command,
        page: usize,
        renderer: &mut dyn Renderer,
    ) -> Result<()> {
        session.dispatch(command, &mut Quiet).await?;

        let target = page.max(1);
        while session.pagination().current_page() < target {
            if !session.pagination().display_metadata().has_next() {
                warn!(
                    requested = target,
                    page_count = session.pagination().page_count(),
                    "Requested page is past the end, showing the last page"
                );
                break;
            }
            session.dispatch(Command::Advance, &mut Quiet).await?;
        }

        session.render_current(renderer)
    }

    /// Interactive loop: one command per input line until `quit` or EOF
    async fn browse<F, R>(
        &self,
        session: &mut Session<F>,
        renderer: &mut dyn Renderer,
        initial: Option<Command>,
        input: R,
    ) -> Result<()>
    where
        F: BreweryFetcher,
        R: AsyncBufRead + Unpin,
    {
        renderer.message("Type 'help' for commands.")?;

        if let Some(command) = initial {
            if let Flow::Quit = Self::step(session, command, renderer).await? {
                return Ok(());
            }
        }

        let mut lines = input.lines();
        while let Some(line) = lines.next_line().await? {
            match Command::parse_line(&line) {
                Ok(Some(command)) => {
                    if let Flow::Quit = Self::step(session, command, renderer).await? {
                        return Ok(());
                    }
                }
                Ok(None) => {}
                Err(e) => renderer.error(&e)?,
            }
        }

        debug!("Input closed");
        Ok(())
    }

    /// Dispatch one command, keeping the loop alive on recoverable errors
    async fn step<F: BreweryFetcher>(
        session: &mut Session<F>,
        command: Command,
        renderer: &mut dyn Renderer,
    ) -> Result<Flow> {
        match session.dispatch(command, renderer).await {
            Ok(flow) => Ok(flow),
            // Output is broken, nothing left to show errors on
            Err(e @ (Error::Render { .. } | Error::Io(_))) => Err(e),
            // Already shown by the session
            Err(_) => Ok(Flow::Continue),
        }
    }
}

/// Renderer that discards everything; used while positioning one-shot output
struct Quiet;

impl Renderer for Quiet {
    fn loading(&mut self, _active: bool) -> Result<()> {
        Ok(())
    }

    fn results(&mut self, _label: &str, _page: Page<'_, Brewery>) -> Result<()> {
        Ok(())
    }

    fn detail(&mut self, _brewery: &Brewery) -> Result<()> {
        Ok(())
    }

    fn close_detail(&mut self) -> Result<()> {
        Ok(())
    }

    fn error(&mut self, _error: &Error) -> Result<()> {
        Ok(())
    }

    fn message(&mut self, _text: &str) -> Result<()> {
        Ok(())
    }
}
