//! Browsing session
//!
//! Sequencing is always: fetch completes, then the controller is reset, then
//! the first page is drawn. A failed fetch leaves the previous results and
//! page position untouched.
//!
//! `dispatch` takes `&mut self`, so navigation cannot interleave with a fetch.
//! While one is outstanding the current page is redrawn with both controls
//! disabled.

use super::command::{Command, Flow, HELP};
use crate::config::DisplayConfig;
use crate::error::{Error, Result};
use crate::fetch::BreweryFetcher;
use crate::pagination::{Page, PaginationController};
use crate::render::Renderer;
use crate::types::Brewery;
use tracing::{debug, info, warn};

/// Where a result set comes from
enum Source {
    Search(String),
    Random(u32),
}

/// Clears the pending flag when a fetch settles or its future is dropped
struct PendingGuard<'a>(&'a mut bool);

impl Drop for PendingGuard<'_> {
    fn drop(&mut self) {
        *self.0 = false;
    }
}

/// One user's browsing state: the current result set, its page cursor and
/// the open detail view
pub struct Session<F: BreweryFetcher> {
    fetcher: F,
    display: DisplayConfig,
    pagination: PaginationController,
    label: String,
    selected: Option<Brewery>,
    pending: bool,
    last_error: Option<String>,
}

impl<F: BreweryFetcher> Session<F> {
    /// Create a session with an empty result set
    pub fn new(fetcher: F, display: DisplayConfig) -> Self {
        let pagination = PaginationController::new(display.page_size);
        Self {
            fetcher,
            display,
            pagination,
            label: String::new(),
            selected: None,
            pending: false,
            last_error: None,
        }
    }

    /// Apply a command, drawing its effect through `renderer`
    ///
    /// Errors other than rendering failures are shown through the renderer
    /// before being returned.
    pub async fn dispatch(
        &mut self,
        command: Command,
        renderer: &mut dyn Renderer,
    ) -> Result<Flow> {
        debug!(?command, "Dispatching command");
        match self.apply(command, renderer).await {
            Ok(flow) => {
                self.last_error = None;
                Ok(flow)
            }
            Err(e) => {
                warn!(error = %e, "Command failed");
                if !matches!(e, Error::Render { .. } | Error::Io(_)) {
                    renderer.error(&e)?;
                }
                self.last_error = Some(e.to_string());
                Err(e)
            }
        }
    }

    async fn apply(&mut self, command: Command, renderer: &mut dyn Renderer) -> Result<Flow> {
        match command {
            Command::Search(term) => {
                let term = term.trim().to_string();
                let label = self.display.search_label_for(&term);
                self.load(Source::Search(term), label, renderer).await?;
            }
            Command::Random(size) => {
                let size = size.unwrap_or(self.display.random_sample_size);
                let label = self.display.random_label.clone();
                self.load(Source::Random(size), label, renderer).await?;
            }
            Command::Advance => {
                if self.pagination.advance() {
                    renderer.results(&self.label, self.page())?;
                } else {
                    debug!("Already on the last page");
                }
            }
            Command::Retreat => {
                if self.pagination.retreat() {
                    renderer.results(&self.label, self.page())?;
                } else {
                    debug!("Already on the first page");
                }
            }
            Command::SelectItem(key) => self.select(&key, renderer).await?,
            Command::CloseDetail => {
                if self.selected.take().is_some() {
                    renderer.close_detail()?;
                }
            }
            Command::Help => renderer.message(HELP)?,
            Command::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    /// Run one fetch and, only if it succeeds, replace the result set
    async fn load(
        &mut self,
        source: Source,
        label: String,
        renderer: &mut dyn Renderer,
    ) -> Result<()> {
        self.begin_fetch(renderer)?;
        let result = {
            let _pending = PendingGuard(&mut self.pending);
            match source {
                Source::Search(term) => {
                    self.fetcher
                        .search(&term, self.display.search_fetch_size)
                        .await
                }
                Source::Random(size) => self.fetcher.random(size).await,
            }
        };
        renderer.loading(false)?;

        let records = result?;
        info!(label = %label, count = records.len(), "Loaded result set");
        self.pagination.reset(records);
        self.label = label;
        self.selected = None;
        renderer.results(&self.label, self.page())
    }

    async fn select(&mut self, key: &str, renderer: &mut dyn Renderer) -> Result<()> {
        let local = self.pagination.find(key).cloned().or_else(|| {
            key.parse::<usize>()
                .ok()
                .and_then(|position| self.pagination.get(position).cloned())
        });

        let brewery = match local {
            Some(brewery) => brewery,
            None => {
                self.begin_fetch(renderer)?;
                let result = {
                    let _pending = PendingGuard(&mut self.pending);
                    self.fetcher.get(key).await
                };
                renderer.loading(false)?;
                result?
            }
        };

        renderer.detail(&brewery)?;
        self.selected = Some(brewery);
        Ok(())
    }

    /// Show the loading indicator and, when a result set is on screen, redraw
    /// it with both controls disabled
    ///
    /// On success the pending flag is set; the caller hands it to a
    /// [`PendingGuard`] for the duration of the fetch.
    fn begin_fetch(&mut self, renderer: &mut dyn Renderer) -> Result<()> {
        renderer.loading(true)?;
        self.pending = true;
        if !self.label.is_empty() {
            if let Err(e) = renderer.results(&self.label, self.page()) {
                self.pending = false;
                return Err(e);
            }
        }
        Ok(())
    }

    /// Draw the current page again
    pub fn render_current(&self, renderer: &mut dyn Renderer) -> Result<()> {
        renderer.results(&self.label, self.page())
    }

    /// Current page; both controls are disabled while a fetch is pending
    pub fn page(&self) -> Page<'_, Brewery> {
        let page = self.pagination.page();
        if self.pending {
            page.with_controls_disabled()
        } else {
            page
        }
    }

    pub fn pagination(&self) -> &PaginationController {
        &self.pagination
    }

    /// Label of the current result set (empty before the first fetch)
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Brewery shown in the detail view, if open
    pub fn selected(&self) -> Option<&Brewery> {
        self.selected.as_ref()
    }

    /// True only while a fetch is outstanding; a dropped dispatch clears it
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Message of the most recent failed command, cleared by the next success
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    pub fn display(&self) -> &DisplayConfig {
        &self.display
    }
}
