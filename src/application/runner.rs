/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/

//! Smoke-test runner
//!
//! Runs one scenario as a strict sequence of calls: authenticate, take the
//! bearer token from the response, call the authenticated endpoint. Each
//! call's status and body is written to the output sink as soon as it
//! returns. A non-success status on the authentication call ends the run.

use crate::application::client::Client;
use crate::application::config::{Config, Credentials};
use crate::application::interfaces::auth::AuthService;
use crate::application::interfaces::transfers::TransferService;
use crate::constants::{
    LOGIN_PATH, LOGIN_SUCCESS, REGISTER_PATH, REGISTER_SUCCESS, TRANSFERS_PATH, TRANSFERS_SUCCESS,
};
use crate::error::AppError;
use crate::model::auth::BearerToken;
use crate::model::requests::{LoginRequest, RegisterRequest};
use crate::model::responses::HttpRecord;
use crate::presentation::report::{SmokeReport, StepReport};
use crate::utils::id::unique_email;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::Write;
use std::process::ExitCode;
use tracing::{error, info, warn};

/// Console lines printed around one call
struct StepLines {
    banner: &'static str,
    status: &'static str,
    response: &'static str,
    failure: &'static str,
}

const REGISTER_LINES: StepLines = StepLines {
    banner: "Registering a new user...",
    status: "Status code",
    response: "Response",
    failure: "Failed to register user",
};

const LOGIN_LINES: StepLines = StepLines {
    banner: "Logging in...",
    status: "Status code",
    response: "Response",
    failure: "Failed to login",
};

const TRANSFERS_LINES: StepLines = StepLines {
    banner: "Getting transfers...",
    status: "Transfers status code",
    response: "Transfers response",
    failure: "Failed to get transfers",
};

// Register-then-login reports each call under its own name.
const SIGNUP_LINES: StepLines = StepLines {
    banner: "Testing signup...",
    status: "Signup response status",
    response: "Signup response",
    failure: "Signup failed!",
};

const LOGIN_CHECK_LINES: StepLines = StepLines {
    banner: "Testing login...",
    status: "Login response status",
    response: "Login response",
    failure: "Login failed!",
};

/// A single call a scenario can make
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Step {
    /// `POST /auth/register`
    Register,
    /// `POST /auth/login`
    Login,
    /// `GET /transfers`
    Transfers,
}

impl Step {
    /// HTTP method of the call
    #[must_use]
    pub fn method(&self) -> &'static str {
        match self {
            Step::Register | Step::Login => "POST",
            Step::Transfers => "GET",
        }
    }

    /// Endpoint path relative to the base URL
    #[must_use]
    pub fn path(&self) -> &'static str {
        match self {
            Step::Register => REGISTER_PATH,
            Step::Login => LOGIN_PATH,
            Step::Transfers => TRANSFERS_PATH,
        }
    }

    /// Status codes that count as success for this call
    #[must_use]
    pub fn success_statuses(&self) -> &'static [u16] {
        match self {
            Step::Register => REGISTER_SUCCESS,
            Step::Login => LOGIN_SUCCESS,
            Step::Transfers => TRANSFERS_SUCCESS,
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Step::Register => "register",
            Step::Login => "login",
            Step::Transfers => "transfers",
        };
        f.write_str(name)
    }
}

/// Sequence of calls to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Scenario {
    /// Register and print the response
    Register,
    /// Register, then list transfers with the returned token
    RegisterTransfers,
    /// Log in, then list transfers with the returned token
    LoginTransfers,
    /// Register with a full profile, then log in with the same credentials
    RegisterLogin,
}

impl Scenario {
    /// Kebab-case name
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Scenario::Register => "register",
            Scenario::RegisterTransfers => "register-transfers",
            Scenario::LoginTransfers => "login-transfers",
            Scenario::RegisterLogin => "register-login",
        }
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Runs smoke-test scenarios against a service
///
/// Generic over the service so the flow can be driven by any implementation
/// of the service interfaces; [`SmokeRunner::new`] wires the HTTP [`Client`].
pub struct SmokeRunner<S = Client> {
    service: S,
    base_url: String,
    credentials: Credentials,
    unique_email: bool,
}

impl SmokeRunner<Client> {
    /// Creates a runner talking HTTP to the configured base URL
    pub fn new(config: Config) -> Result<Self, AppError> {
        let client = Client::new(&config)?;
        let base_url = client.base_url().to_string();
        Ok(Self {
            service: client,
            base_url,
            credentials: config.credentials,
            unique_email: config.unique_email,
        })
    }
}

impl<S> SmokeRunner<S>
where
    S: AuthService + TransferService,
{
    /// Creates a runner over an arbitrary service implementation
    ///
    /// `base_url` is only used to label the report.
    pub fn with_service(service: S, base_url: impl Into<String>, credentials: Credentials) -> Self {
        Self {
            service,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            credentials,
            unique_email: false,
        }
    }

    /// Replaces the registration email with a fresh one on every run
    #[must_use]
    pub fn unique_email(mut self, enabled: bool) -> Self {
        self.unique_email = enabled;
        self
    }

    /// Credentials the runner sends
    #[must_use]
    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Runs `scenario`, writing progress to `out`
    ///
    /// # Returns
    /// * `Ok(SmokeReport)` - Every call made; `outcome` tells whether a status check failed
    /// * `Err(AppError)` - On transport failure, an undecodable auth body, a
    ///   missing token, or a failed write to `out`
    pub async fn run<W: Write>(
        &self,
        scenario: Scenario,
        out: &mut W,
    ) -> Result<SmokeReport, AppError> {
        info!("Running scenario {}", scenario);
        let mut report = SmokeReport::new(scenario);

        match scenario {
            Scenario::Register => {
                let request = self.register_request(false);
                self.register(&request, &REGISTER_LINES, &mut report, out)
                    .await?;
            }
            Scenario::RegisterTransfers => {
                let request = self.register_request(false);
                if let Some(record) = self
                    .register(&request, &REGISTER_LINES, &mut report, out)
                    .await?
                {
                    let token = self.token(&record, out)?;
                    self.transfers(&token, &mut report, out).await?;
                }
            }
            Scenario::LoginTransfers => {
                let request = LoginRequest::from(&self.credentials);
                if let Some(record) = self.login(&request, &LOGIN_LINES, &mut report, out).await? {
                    let token = self.token(&record, out)?;
                    self.transfers(&token, &mut report, out).await?;
                }
            }
            Scenario::RegisterLogin => {
                let request = self.register_request(true);
                if self
                    .register(&request, &SIGNUP_LINES, &mut report, out)
                    .await?
                    .is_some()
                {
                    writeln!(out, "Signup successful!")?;
                    writeln!(out)?;
                    let login = LoginRequest::from(&request);
                    if self
                        .login(&login, &LOGIN_CHECK_LINES, &mut report, out)
                        .await?
                        .is_some()
                    {
                        writeln!(out, "Login successful!")?;
                    }
                }
            }
        }

        if report.passed() {
            info!("Scenario {} passed", scenario);
        } else {
            warn!("Scenario {} failed: {:?}", scenario, report.outcome);
        }
        Ok(report)
    }

    fn register_request(&self, full_profile: bool) -> RegisterRequest {
        let credentials = if full_profile {
            self.credentials.clone().with_full_profile()
        } else {
            self.credentials.clone()
        };
        let mut request = RegisterRequest::from(&credentials);
        if self.unique_email {
            request.email = unique_email();
        }
        request
    }

    /// Registers and returns the record when the status is a success
    async fn register<W: Write>(
        &self,
        request: &RegisterRequest,
        lines: &StepLines,
        report: &mut SmokeReport,
        out: &mut W,
    ) -> Result<Option<HttpRecord>, AppError> {
        writeln!(out, "{}", lines.banner)?;
        let record = self.service.register(request).await?;
        self.record_step(Step::Register, record, lines, report, out)
    }

    /// Logs in and returns the record when the status is a success
    async fn login<W: Write>(
        &self,
        request: &LoginRequest,
        lines: &StepLines,
        report: &mut SmokeReport,
        out: &mut W,
    ) -> Result<Option<HttpRecord>, AppError> {
        writeln!(out, "{}", lines.banner)?;
        let record = self.service.login(request).await?;
        self.record_step(Step::Login, record, lines, report, out)
    }

    async fn transfers<W: Write>(
        &self,
        token: &BearerToken,
        report: &mut SmokeReport,
        out: &mut W,
    ) -> Result<(), AppError> {
        writeln!(out, "{}", TRANSFERS_LINES.banner)?;
        let record = self.service.get_transfers(Some(token)).await?;
        self.record_step(Step::Transfers, record, &TRANSFERS_LINES, report, out)?;
        Ok(())
    }

    fn token<W: Write>(&self, record: &HttpRecord, out: &mut W) -> Result<BearerToken, AppError> {
        let token = BearerToken::from_record(record)?;
        writeln!(out, "Token: {token}")?;
        Ok(token)
    }

    /// Prints the exchange, adds it to the report and hands the record back
    /// only if its status is in the step's success set
    fn record_step<W: Write>(
        &self,
        step: Step,
        record: HttpRecord,
        lines: &StepLines,
        report: &mut SmokeReport,
        out: &mut W,
    ) -> Result<Option<HttpRecord>, AppError> {
        writeln!(out, "{}: {}", lines.status, record.status)?;
        writeln!(out, "{}: {}", lines.response, record.body)?;

        let url = format!("{}/{}", self.base_url, step.path());
        let step_report = StepReport::new(step, url, record);
        let success = step_report.success;
        let record = step_report.record.clone();
        report.push(step_report);

        if success {
            Ok(Some(record))
        } else {
            warn!("{} returned status {}", step, record.status);
            writeln!(out, "{}", lines.failure)?;
            Ok(None)
        }
    }
}

/// Runs `scenario` with `config`, printing to stdout, and maps the result to
/// a process exit code
///
/// Prints the summary table after the run and `Error: <message>` if the run
/// aborted. Exits with 1 unless every call succeeded.
pub async fn run_to_stdout(scenario: Scenario, config: Config) -> ExitCode {
    let runner = match SmokeRunner::new(config) {
        Ok(runner) => runner,
        Err(e) => {
            error!("Failed to build client: {}", e);
            println!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let mut stdout = std::io::stdout();
    match runner.run(scenario, &mut stdout).await {
        Ok(report) => {
            println!();
            print!("{report}");
            if report.passed() {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
        Err(e) => {
            error!("Scenario {} aborted: {}", scenario, e);
            println!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
