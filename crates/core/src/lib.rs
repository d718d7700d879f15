pub mod errors;
pub mod models;
pub mod services;
pub mod storage;

use chrono::NaiveDate;
use models::{
    dashboard::Dashboard,
    entry::{Entry, EntryKind},
    forecast::DailyExpensePoint,
    ledger::Ledger,
    month::MonthKey,
    settings::Settings,
    summary::{MonthlyProfit, Summary},
    user::Session,
};
use services::{
    auth_service::AuthService, chart_service::ChartService, export_service::ExportService,
    forecast_service::ForecastService, ledger_service::LedgerService,
    month_service::MonthService, profit_service::ProfitService,
    summary_service::SummaryService,
};
use std::sync::Once;
use storage::encryption::KdfParams;
use storage::manager::StorageManager;
use tracing::{info, warn};

use errors::CoreError;

/// Largest `decimal_places` accepted for display formatting.
const MAX_DECIMAL_PLACES: u8 = 8;

static TRACING_INIT: Once = Once::new();

/// Install a `tracing` fmt subscriber filtered by `RUST_LOG`
/// (default `budget_tracker_core=info`). Safe to call more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("budget_tracker_core=info"));

        // Another subscriber may already be installed by the host application
        let _ = fmt().with_env_filter(filter).try_init();
    });
}

/// Main entry point for the Budget Tracker core library.
/// Holds the ledger state and all services needed to operate on it.
///
/// Every per-user operation takes a [`Session`] obtained from [`login`](Self::login).
#[must_use]
pub struct BudgetTracker {
    ledger: Ledger,
    ledger_service: LedgerService,
    auth_service: AuthService,
    month_service: MonthService,
    summary_service: SummaryService,
    profit_service: ProfitService,
    forecast_service: ForecastService,
    chart_service: ChartService,
    export_service: ExportService,
    /// Identifies this tracker to the sessions it issues.
    instance: uuid::Uuid,
    /// Tracks whether any mutation has occurred since the last save/load.
    dirty: bool,
}

impl std::fmt::Debug for BudgetTracker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BudgetTracker")
            .field("rows", &self.ledger.rows.len())
            .field("users", &self.ledger.users.len())
            .field("settings", &self.ledger.settings)
            .field("dirty", &self.dirty)
            .finish()
    }
}

impl BudgetTracker {
    /// Create a brand new empty ledger with default settings.
    pub fn create_new() -> Self {
        Self::build(Ledger::default())
    }

    /// Create an empty ledger with the given settings.
    pub fn with_settings(settings: Settings) -> Self {
        Self::build(Ledger {
            settings,
            ..Ledger::default()
        })
    }

    /// Wrap an already-loaded ledger (e.g., from another store).
    pub fn from_ledger(ledger: Ledger) -> Self {
        Self::build(ledger)
    }

    /// Load an existing ledger from encrypted bytes.
    /// Use this where the host handles file I/O.
    pub fn load_from_bytes(encrypted: &[u8], passphrase: &str) -> Result<Self, CoreError> {
        let ledger = StorageManager::load_from_bytes(encrypted, passphrase)?;
        Ok(Self::build(ledger))
    }

    /// Save the current ledger to encrypted bytes.
    /// Clears the unsaved-changes flag on success.
    pub fn save_to_bytes(&mut self, passphrase: &str) -> Result<Vec<u8>, CoreError> {
        let bytes = StorageManager::save_to_bytes(&self.ledger, passphrase)?;
        self.dirty = false;
        Ok(bytes)
    }

    /// Load from an encrypted file on disk (native only, not WASM).
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from_file(path: &str, passphrase: &str) -> Result<Self, CoreError> {
        let ledger = StorageManager::load_from_file(path, passphrase)?;
        Ok(Self::build(ledger))
    }

    /// Save to an encrypted file on disk (native only, not WASM).
    /// Clears the unsaved-changes flag on success.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn save_to_file(&mut self, path: &str, passphrase: &str) -> Result<(), CoreError> {
        StorageManager::save_to_file(&self.ledger, path, passphrase)?;
        self.dirty = false;
        Ok(())
    }

    /// Read-only view of the underlying ledger.
    #[must_use]
    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    // ── Users ───────────────────────────────────────────────────────

    /// Register a new user. Fails with `UserAlreadyExists` if the name is taken.
    pub fn register_user(&mut self, username: &str, secret: &str) -> Result<(), CoreError> {
        self.auth_service
            .register_user(&mut self.ledger, username, secret)?;
        self.dirty = true;
        Ok(())
    }

    /// Check credentials and hand back a session for the user.
    pub fn login(&self, username: &str, secret: &str) -> Result<Session, CoreError> {
        if self.auth_service.authenticate(&self.ledger, username, secret)? {
            info!(username = username.trim(), "login");
            Ok(Session::new(username.trim(), self.instance))
        } else {
            Err(CoreError::InvalidCredentials)
        }
    }

    #[must_use]
    pub fn user_exists(&self, username: &str) -> bool {
        self.auth_service.user_exists(&self.ledger, username)
    }

    // ── Entries ─────────────────────────────────────────────────────

    /// Record an income or expense for the session's user.
    pub fn add_entry(
        &mut self,
        session: &Session,
        date: NaiveDate,
        kind: EntryKind,
        description: &str,
        amount: f64,
    ) -> Result<uuid::Uuid, CoreError> {
        let owner = self.owner_of(session)?;
        let row = self.ledger_service.append_entry(
            &mut self.ledger,
            owner,
            date,
            kind,
            description,
            amount,
        )?;
        self.dirty = true;
        Ok(row.id)
    }

    /// All of the user's entries, newest first.
    pub fn get_entries(&self, session: &Session) -> Result<Vec<Entry>, CoreError> {
        let owner = self.owner_of(session)?;
        self.ledger_service.entries_newest_first(&self.ledger, owner)
    }

    /// Number of entries the user has recorded, without parsing them.
    pub fn entry_count(&self, session: &Session) -> Result<usize, CoreError> {
        let owner = self.owner_of(session)?;
        Ok(self.ledger.rows_for(owner).count())
    }

    // ── Aggregations ────────────────────────────────────────────────

    /// Distinct months with entries, oldest first. Empty if the user has none.
    pub fn available_months(&self, session: &Session) -> Result<Vec<MonthKey>, CoreError> {
        let entries = self.snapshot(session)?;
        Ok(self.month_service.available_months(&entries))
    }

    /// Entries dated inside `month`. Unknown months give an empty list.
    pub fn entries_for_month(
        &self,
        session: &Session,
        month: MonthKey,
    ) -> Result<Vec<Entry>, CoreError> {
        let entries = self.snapshot(session)?;
        Ok(self
            .month_service
            .entries_for_month(&entries, month)
            .into_iter()
            .cloned()
            .collect())
    }

    /// Income / expense / profit for one month.
    pub fn summary_for_month(&self, session: &Session, month: MonthKey) -> Result<Summary, CoreError> {
        let entries = self.snapshot(session)?;
        let selected = self.month_service.entries_for_month(&entries, month);
        Ok(self.summary_service.summarize(selected))
    }

    /// Income / expense / profit across the user's whole history.
    pub fn overall_summary(&self, session: &Session) -> Result<Summary, CoreError> {
        let entries = self.snapshot(session)?;
        Ok(self.summary_service.summarize(&entries))
    }

    /// Profit per month across the whole history, oldest first.
    pub fn monthly_profit(&self, session: &Session) -> Result<Vec<MonthlyProfit>, CoreError> {
        let entries = self.snapshot(session)?;
        Ok(self.profit_service.monthly_profit(&entries))
    }

    /// Gap-filled daily expenses with a trailing 7-day average.
    pub fn expense_forecast(&self, session: &Session) -> Result<Vec<DailyExpensePoint>, CoreError> {
        let entries = self.snapshot(session)?;
        Ok(self.forecast_service.expense_series(&entries))
    }

    /// Everything a dashboard page shows, computed from one snapshot.
    ///
    /// `month` defaults to the oldest available month. Returns `Ok(None)`
    /// when the user has no entries at all.
    pub fn dashboard(
        &self,
        session: &Session,
        month: Option<MonthKey>,
    ) -> Result<Option<Dashboard>, CoreError> {
        let entries = self.snapshot(session)?;
        let months = self.month_service.available_months(&entries);

        let Some(&oldest) = months.first() else {
            return Ok(None);
        };
        let selected_month = month.unwrap_or(oldest);

        let selected = self.month_service.entries_for_month(&entries, selected_month);

        Ok(Some(Dashboard {
            summary: self.summary_service.summarize(selected.iter().copied()),
            kind_breakdown: self.chart_service.kind_breakdown(selected.iter().copied()),
            daily_totals: self.chart_service.daily_kind_totals(selected.iter().copied()),
            entries: selected.into_iter().cloned().collect(),
            monthly_profit: self.profit_service.monthly_profit(&entries),
            forecast: self.forecast_service.expense_series(&entries),
            months,
            selected_month,
        }))
    }

    // ── Export ──────────────────────────────────────────────────────

    /// One month's entries as CSV (`date,kind,description,amount`).
    pub fn export_month_csv(&self, session: &Session, month: MonthKey) -> Result<String, CoreError> {
        let entries = self.snapshot(session)?;
        let selected = self.month_service.entries_for_month(&entries, month);
        self.export_service.entries_to_csv(selected)
    }

    /// All of the user's entries as a JSON array.
    pub fn export_entries_to_json(&self, session: &Session) -> Result<String, CoreError> {
        let entries = self.snapshot(session)?;
        serde_json::to_string_pretty(&entries)
            .map_err(|e| CoreError::Serialization(format!("Failed to serialize entries to JSON: {e}")))
    }

    // ── Settings ────────────────────────────────────────────────────

    #[must_use]
    pub fn get_settings(&self) -> &Settings {
        &self.ledger.settings
    }

    /// Set the symbol prefixed to formatted amounts (e.g., "₹", "$").
    pub fn set_currency_symbol(&mut self, symbol: &str) -> Result<(), CoreError> {
        let trimmed = symbol.trim();
        if trimmed.is_empty() {
            return Err(CoreError::ValidationError("Currency symbol must not be empty".into()));
        }
        self.ledger.settings.currency_symbol = trimmed.to_string();
        self.dirty = true;
        Ok(())
    }

    /// Set how many decimals formatted amounts show (0..=8).
    pub fn set_decimal_places(&mut self, places: u8) -> Result<(), CoreError> {
        if places > MAX_DECIMAL_PLACES {
            return Err(CoreError::ValidationError(format!(
                "Decimal places must be at most {MAX_DECIMAL_PLACES}, got {places}"
            )));
        }
        self.ledger.settings.decimal_places = places;
        self.dirty = true;
        Ok(())
    }

    /// Set the Argon2id cost used for passwords registered from now on.
    pub fn set_credential_kdf_params(&mut self, params: KdfParams) -> Result<(), CoreError> {
        params.validate().map_err(CoreError::ValidationError)?;
        self.ledger.settings.credential_kdf = params;
        self.dirty = true;
        Ok(())
    }

    /// Format an amount for display using the current settings.
    #[must_use]
    pub fn format_amount(&self, value: f64) -> String {
        self.ledger.settings.format_amount(value)
    }

    /// Returns `true` if the ledger has been modified since the last save or load.
    #[must_use]
    pub fn has_unsaved_changes(&self) -> bool {
        self.dirty
    }

    // ── Internal ────────────────────────────────────────────────────

    /// One consistent read of the user's entries for a single computation.
    fn snapshot(&self, session: &Session) -> Result<Vec<Entry>, CoreError> {
        let owner = self.owner_of(session)?;
        self.ledger_service.fetch_entries(&self.ledger, owner)
    }

    fn owner_of<'s>(&self, session: &'s Session) -> Result<&'s str, CoreError> {
        if session.issuer() != self.instance {
            warn!(owner = session.owner(), "session issued by another tracker");
            return Err(CoreError::ForeignSession);
        }
        Ok(session.owner())
    }

    fn build(ledger: Ledger) -> Self {
        Self {
            ledger,
            ledger_service: LedgerService::new(),
            auth_service: AuthService::new(),
            month_service: MonthService::new(),
            summary_service: SummaryService::new(),
            profit_service: ProfitService::new(),
            forecast_service: ForecastService::new(),
            chart_service: ChartService::new(),
            export_service: ExportService::new(),
            instance: uuid::Uuid::new_v4(),
            dirty: false,
        }
    }
}
