//! Interactive session: one input line is one UI event.
//!
//! The session owns the store and the form. The text view is registered as
//! the store's observer, so submits and removals redraw the page without the
//! session asking for it.

use std::io::{BufRead, Write};
use std::rc::Rc;

use crate::adapters::csv_adapter::write_trades;
use crate::adapters::text_view::TextView;
use crate::domain::command::{self, Command, HELP};
use crate::domain::error::GainTrackerError;
use crate::domain::form::TradeForm;
use crate::domain::record_list::record_at;
use crate::domain::settings::Settings;
use crate::domain::store::{ObserverId, PortfolioStore};

const PROMPT: &str = "> ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct Session<W: Write + 'static> {
    store: PortfolioStore,
    form: TradeForm,
    view: Rc<TextView<W>>,
    view_id: ObserverId,
}

impl<W: Write + 'static> Session<W> {
    pub fn new(out: W, settings: &Settings) -> Self {
        let view = Rc::new(TextView::new(out, settings));
        let mut store = PortfolioStore::new();
        let view_id = store.subscribe(view.clone());
        Session {
            store,
            form: TradeForm::new(settings.form_policy),
            view,
            view_id,
        }
    }

    pub fn store(&self) -> &PortfolioStore {
        &self.store
    }

    pub fn form(&self) -> &TradeForm {
        &self.form
    }

    /// Apply one parsed command.
    pub fn execute(&mut self, command: Command) -> Result<Flow, GainTrackerError> {
        match command {
            Command::Set { field, value } => {
                self.form.set_field(field, &value)?;
                self.view.render_preview(&self.form)?;
            }
            Command::Submit => {
                self.form.submit(&mut self.store)?;
            }
            Command::Remove { row } => {
                let record = record_at(self.store.records(), row)?.clone();
                let removed = self.store.remove_record(&record);
                if removed > 1 {
                    log::info!(
                        "row {} matched {} identical records for {}, all removed",
                        row,
                        removed,
                        record.ticker
                    );
                }
            }
            Command::Show => self.view.render_page(self.store.records())?,
            Command::Draft => self.view.render_draft(&self.form)?,
            Command::Reset => {
                self.form.reset();
                self.view.write_text("Draft cleared.\n")?;
            }
            Command::Export => {
                let records = self.store.records();
                self.view.with_output(|out| write_trades(records, out))?;
            }
            Command::Help => self.view.write_text(&format!("{}\n", HELP))?,
            Command::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    /// Parse and apply one input line.
    ///
    /// Command and form errors are shown to the user and the session carries
    /// on; only output failures are returned.
    pub fn handle_line(&mut self, line: &str) -> Result<Flow, GainTrackerError> {
        let command = match command::parse(line) {
            Ok(Some(command)) => command,
            Ok(None) => return Ok(Flow::Continue),
            Err(e) => {
                log::debug!("rejected input {:?}", line);
                self.view
                    .write_text(&format!("{}\n", e.display_with_context(line)))?;
                return Ok(Flow::Continue);
            }
        };

        match self.execute(command) {
            Ok(flow) => Ok(flow),
            Err(GainTrackerError::Io(e)) => Err(GainTrackerError::Io(e)),
            Err(e) => {
                self.view.write_text(&format!("error: {}\n", e))?;
                Ok(Flow::Continue)
            }
        }
    }

    /// Draw the initial page, then process `input` until it ends or a quit
    /// command arrives.
    pub fn run<R: BufRead>(&mut self, input: R, prompt: bool) -> Result<(), GainTrackerError> {
        self.view.render_page(self.store.records())?;
        log::info!("session started");
        if prompt {
            self.view.write_text(PROMPT)?;
        }

        for line in input.lines() {
            let line = line?;
            if self.handle_line(&line)? == Flow::Quit {
                break;
            }
            if prompt {
                self.view.write_text(PROMPT)?;
            }
        }

        log::info!("session ended with {} record(s)", self.store.len());
        Ok(())
    }

    /// Detach the view and hand back the output writer.
    pub fn into_output(mut self) -> Option<W> {
        self.store.unsubscribe(self.view_id);
        drop(self.store);
        Rc::try_unwrap(self.view).ok().map(TextView::into_inner)
    }
}
