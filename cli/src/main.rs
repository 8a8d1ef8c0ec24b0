use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use chrono::{Local, NaiveDate};
use clap::{Args, Parser, Subcommand, ValueEnum};
use fintrack::config::{self, ConfigError, DEFAULT_API_URL, DEFAULT_AUTH_URL};
use fintrack::forms::{BudgetForm, CategoryForm, GoalForm, LoginForm, ProfileForm, SignupForm, TransactionForm};
use fintrack::net::types::{TransactionQuery, TransactionType};
use fintrack::scope::ViewScope;
use fintrack::state::budgets::BudgetsView;
use fintrack::state::chrome::NavAction;
use fintrack::state::dashboard::{self, DashboardLoad};
use fintrack::state::goals::GoalsView;
use fintrack::state::notice::Notice;
use fintrack::state::reports::{self, ReportsView};
use fintrack::state::transactions::{self, TransactionsView, TypeFilter};
use fintrack::state::{auth, profile};
use fintrack::{ApiClient, ApiError, ClientConfig, MemoryNavigator, Navigator, Route};
use serde_json::{Value, json};
use tracing_subscriber::EnvFilter;

const GENERIC_FAILURE: &str = "Something went wrong.";

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("{}", .error.user_message(.fallback))]
    Api {
        #[source]
        error: ApiError,
        fallback: &'static str,
    },
    #[error("invalid date `{0}`; expected YYYY-MM-DD")]
    InvalidDate(String),
    #[error("JSON output failed: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<ApiError> for CliError {
    fn from(error: ApiError) -> Self {
        Self::Api { error, fallback: GENERIC_FAILURE }
    }
}

/// Attach the message shown when the backend gives no detail of its own.
trait OrSay<T> {
    fn or_say(self, fallback: &'static str) -> Result<T, CliError>;
}

impl<T> OrSay<T> for Result<T, ApiError> {
    fn or_say(self, fallback: &'static str) -> Result<T, CliError> {
        self.map_err(|error| CliError::Api { error, fallback })
    }
}

#[derive(Parser, Debug)]
#[command(name = "fintrack", about = "FinTrack personal finance client")]
struct Cli {
    #[arg(long, env = "FINTRACK_API_URL", default_value = DEFAULT_API_URL)]
    api_url: String,

    #[arg(long, env = "FINTRACK_AUTH_URL", default_value = DEFAULT_AUTH_URL)]
    auth_url: String,

    #[arg(long, env = "FINTRACK_SESSION_FILE")]
    session_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Sign in with email and password.
    Login {
        #[arg(long)]
        email: String,
        #[arg(long, env = "FINTRACK_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Create an account and sign in.
    Signup {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long, env = "FINTRACK_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Sign in with a Google ID token.
    Google {
        #[arg(long)]
        credential: String,
    },
    Logout,
    /// Show the signed-in user.
    Whoami,
    /// Show whether a session is stored.
    Status,
    Profile(ProfileCommand),
    Tx(TxCommand),
    Category(CategoryCommand),
    Budget(BudgetCommand),
    Goal(GoalCommand),
    /// Load the dashboard: user, profile, summary and insights.
    Dashboard,
    Insights,
    Forecast,
    Reports {
        #[arg(long, default_value_t = 6)]
        months: u8,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum KindArg {
    Income,
    Expense,
}

impl From<KindArg> for TransactionType {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Income => Self::Income,
            KindArg::Expense => Self::Expense,
        }
    }
}

#[derive(Args, Debug)]
struct ProfileCommand {
    #[command(subcommand)]
    command: ProfileSubcommand,
}

#[derive(Subcommand, Debug)]
enum ProfileSubcommand {
    Show,
    Setup {
        #[arg(long)]
        balance: String,
        #[arg(long)]
        budget: String,
        #[arg(long)]
        currency: Option<String>,
    },
    Update {
        #[arg(long)]
        balance: String,
        #[arg(long)]
        budget: String,
        #[arg(long)]
        currency: Option<String>,
    },
}

#[derive(Args, Debug)]
struct TxCommand {
    #[command(subcommand)]
    command: TxSubcommand,
}

#[derive(Subcommand, Debug)]
enum TxSubcommand {
    List {
        #[arg(long)]
        month: Option<u32>,
        #[arg(long)]
        year: Option<i32>,
        #[arg(long = "type", value_enum)]
        kind: Option<KindArg>,
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        skip: Option<u32>,
        #[arg(long)]
        limit: Option<u32>,
        /// Local filter over description and category.
        #[arg(long, default_value = "")]
        search: String,
    },
    Show {
        id: String,
    },
    Add {
        #[arg(long = "type", value_enum)]
        kind: KindArg,
        #[arg(long)]
        description: String,
        #[arg(long)]
        category: String,
        #[arg(long)]
        amount: String,
        #[arg(long)]
        date: Option<String>,
    },
    Edit {
        id: String,
        #[arg(long = "type", value_enum)]
        kind: Option<KindArg>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        amount: Option<f64>,
    },
    Delete {
        id: String,
    },
}

#[derive(Args, Debug)]
struct CategoryCommand {
    #[command(subcommand)]
    command: CategorySubcommand,
}

#[derive(Subcommand, Debug)]
enum CategorySubcommand {
    List {
        #[arg(long = "type", value_enum)]
        kind: Option<KindArg>,
    },
    Add {
        #[arg(long)]
        name: String,
        #[arg(long = "type", value_enum)]
        kind: KindArg,
        #[arg(long)]
        color: Option<String>,
        #[arg(long)]
        icon: Option<String>,
    },
    Delete {
        id: String,
    },
}

#[derive(Args, Debug)]
struct BudgetCommand {
    #[command(subcommand)]
    command: BudgetSubcommand,
}

#[derive(Subcommand, Debug)]
enum BudgetSubcommand {
    List,
    Add {
        #[arg(long)]
        category: String,
        #[arg(long)]
        limit: String,
    },
    Delete {
        id: String,
    },
}

#[derive(Args, Debug)]
struct GoalCommand {
    #[command(subcommand)]
    command: GoalSubcommand,
}

#[derive(Subcommand, Debug)]
enum GoalSubcommand {
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        target: String,
        #[arg(long)]
        deadline: Option<String>,
        #[arg(long)]
        icon: Option<String>,
    },
    Contribute {
        id: String,
        amount: String,
    },
}

/// Navigator that tells the terminal user when the session was dropped.
struct TerminalNavigator {
    location: MemoryNavigator,
}

impl Navigator for TerminalNavigator {
    fn navigate(&self, route: Route) {
        if route == Route::Auth && self.location.current() != Route::Auth {
            eprintln!("Session ended. Run `fintrack login` to sign in again.");
        }
        self.location.navigate(route);
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", Notice::error(err.to_string()));
            ExitCode::FAILURE
        }
    }
}

fn build_client(cli: &Cli) -> Result<ApiClient, CliError> {
    let session_file = match &cli.session_file {
        Some(path) => path.clone(),
        None => config::default_session_file()?,
    };
    let config = ClientConfig {
        api_url: config::normalize_base_url("FINTRACK_API_URL", &cli.api_url)?,
        auth_url: config::normalize_base_url("FINTRACK_AUTH_URL", &cli.auth_url)?,
        session_file,
    };
    tracing::debug!(api = %config.api_url, auth = %config.auth_url, "client configured");
    let navigator = Arc::new(TerminalNavigator { location: MemoryNavigator::new(Route::Dashboard) });
    Ok(ApiClient::from_config(&config, navigator)?)
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let client = build_client(&cli)?;

    match cli.command {
        Command::Login { email, password } => {
            auth::login(&client, &LoginForm { email, password })
                .await
                .or_say(GENERIC_FAILURE)?;
            notify(&Notice::success("You have successfully logged in."));
            Ok(())
        }
        Command::Signup { name, email, password } => {
            let user = auth::signup(&client, &SignupForm { username: name, email, password })
                .await
                .or_say(GENERIC_FAILURE)?;
            notify(&Notice::success("Your account was successfully created."));
            print_json(&serde_json::to_value(user)?)
        }
        Command::Google { credential } => {
            auth::google_login(&client, &credential)
                .await
                .or_say("Unable to connect to Google. Please try again.")?;
            notify(&Notice::success("Welcome to FinTrack AI."));
            Ok(())
        }
        Command::Logout => {
            auth::logout(&client)?;
            notify(&Notice::success("Logged out."));
            Ok(())
        }
        Command::Whoami => {
            let user = client.current_user().await.or_say("Failed to load user")?;
            print_json(&serde_json::to_value(user)?)
        }
        Command::Status => {
            let action = NavAction::for_token(client.session().token().as_deref());
            print_json(&json!({
                "authenticated": action == NavAction::Logout,
                "action": action.label(),
                "target": action.target().path(),
            }))
        }
        Command::Profile(cmd) => run_profile(&client, cmd).await,
        Command::Tx(cmd) => run_tx(&client, cmd).await,
        Command::Category(cmd) => run_category(&client, cmd).await,
        Command::Budget(cmd) => run_budget(&client, cmd).await,
        Command::Goal(cmd) => run_goal(&client, cmd).await,
        Command::Dashboard => run_dashboard(&client).await,
        Command::Insights => {
            let insights = client.ai_insights().await.or_say("Failed to load insights")?;
            print_json(&serde_json::to_value(insights)?)
        }
        Command::Forecast => {
            let forecast = reports::load_forecast(&client).await.or_say("Failed to load forecast")?;
            print_json(&serde_json::to_value(forecast)?)
        }
        Command::Reports { months } => {
            let mut view = ReportsView::new();
            view.set_months(months);
            let response = view.load(&client).await.or_say("Failed to load reports.")?;
            print_json(&serde_json::to_value(response)?)
        }
    }
}

async fn run_profile(client: &ApiClient, cmd: ProfileCommand) -> Result<(), CliError> {
    match cmd.command {
        ProfileSubcommand::Show => {
            let profile = client.get_profile().await.or_say("Failed to load profile")?;
            print_json(&serde_json::to_value(profile)?)
        }
        ProfileSubcommand::Setup { balance, budget, currency } => {
            let form = ProfileForm { initial_balance: balance, monthly_budget: budget, currency };
            let created = profile::complete_setup(client, &form)
                .await
                .or_say("Failed to create profile. Please try again.")?;
            notify(&Notice::success("Your financial profile has been set up successfully."));
            print_json(&serde_json::to_value(created)?)
        }
        ProfileSubcommand::Update { balance, budget, currency } => {
            let form = ProfileForm { initial_balance: balance, monthly_budget: budget, currency };
            let updated = profile::update(client, &form).await.or_say("Failed to update profile")?;
            print_json(&serde_json::to_value(updated)?)
        }
    }
}

async fn run_tx(client: &ApiClient, cmd: TxCommand) -> Result<(), CliError> {
    match cmd.command {
        TxSubcommand::List { month, year, kind, category, skip, limit, search } => {
            let query = TransactionQuery {
                month,
                year,
                skip,
                limit,
                kind: kind.map(Into::into),
                category,
                ..TransactionQuery::default()
            };
            let mut view = TransactionsView::new();
            view.load(client, &query).await.or_say("Failed to load transactions")?;
            view.search = search;
            view.filter = TypeFilter::from(query.kind);
            let rows: Vec<Value> = view
                .visible()
                .into_iter()
                .map(serde_json::to_value)
                .collect::<Result<_, _>>()?;
            print_json(&Value::Array(rows))
        }
        TxSubcommand::Show { id } => {
            let tx = client.get_transaction(&id).await.or_say("Failed to load transaction")?;
            print_json(&serde_json::to_value(tx)?)
        }
        TxSubcommand::Add { kind, description, category, amount, date } => {
            let form = TransactionForm {
                kind: kind.into(),
                description,
                category,
                amount,
                date: date
                    .as_deref()
                    .map(parse_date)
                    .transpose()?
                    .map(|d| d.and_time(chrono::NaiveTime::MIN)),
            };
            let created = transactions::add_transaction(client, &form)
                .await
                .or_say("Failed to add transaction")?;
            let label = match created.kind {
                TransactionType::Income => "Income",
                TransactionType::Expense => "Expense",
            };
            notify(&Notice::success(format!("{label} added successfully")));
            print_json(&serde_json::to_value(created)?)
        }
        TxSubcommand::Edit { id, kind, description, category, amount } => {
            let mut edited = client.get_transaction(&id).await.or_say("Failed to load transaction")?;
            if let Some(kind) = kind {
                edited.kind = kind.into();
            }
            if let Some(description) = description {
                edited.description = description;
            }
            if let Some(category) = category {
                edited.category = category;
            }
            if let Some(amount) = amount {
                edited.amount = amount;
            }
            let mut view = TransactionsView::new();
            let saved = view
                .save_edit(client, &edited)
                .await
                .or_say("Failed to update transaction")?;
            notify(&Notice::success("Transaction updated successfully"));
            print_json(&serde_json::to_value(saved)?)
        }
        TxSubcommand::Delete { id } => {
            let mut view = TransactionsView::new();
            view.delete(client, &id).await.or_say("Failed to delete transaction")?;
            notify(&Notice::success("Transaction removed successfully"));
            Ok(())
        }
    }
}

async fn run_category(client: &ApiClient, cmd: CategoryCommand) -> Result<(), CliError> {
    match cmd.command {
        CategorySubcommand::List { kind } => {
            let rows = client
                .list_categories(kind.map(Into::into))
                .await
                .or_say("Failed to load categories")?;
            print_json(&serde_json::to_value(rows)?)
        }
        CategorySubcommand::Add { name, kind, color, icon } => {
            let mut form = CategoryForm::new(kind.into());
            form.name = name;
            form.icon = icon;
            if let Some(color) = color {
                form.color = color;
            }
            let body = form.validate().map_err(ApiError::from)?;
            let created = client.create_category(&body).await.or_say("Failed to add category")?;
            print_json(&serde_json::to_value(created)?)
        }
        CategorySubcommand::Delete { id } => {
            client.delete_category(&id).await.or_say("Failed to delete category")?;
            notify(&Notice::success("Category deleted"));
            Ok(())
        }
    }
}

async fn run_budget(client: &ApiClient, cmd: BudgetCommand) -> Result<(), CliError> {
    let today = Local::now().date_naive();
    let mut view = BudgetsView::new();
    match cmd.command {
        BudgetSubcommand::List => {
            view.load(client, today).await.or_say("Failed to load budgets")?;
            print_json(&json!({
                "monthly_budget": view.monthly_budget,
                "spent_this_month": view.spent_this_month,
                "remaining": view.remaining(),
                "budgets": view.budgets,
            }))
        }
        BudgetSubcommand::Add { category, limit } => {
            let form = BudgetForm { category, limit_amount: limit };
            let created = view.add(client, &form, today).await.or_say("Failed to add budget")?;
            notify(&Notice::success("Budget added successfully"));
            print_json(&serde_json::to_value(created)?)
        }
        BudgetSubcommand::Delete { id } => {
            view.delete(client, &id).await.or_say("Failed to delete budget")?;
            notify(&Notice::success("Budget deleted"));
            Ok(())
        }
    }
}

async fn run_goal(client: &ApiClient, cmd: GoalCommand) -> Result<(), CliError> {
    let mut view = GoalsView::new();
    match cmd.command {
        GoalSubcommand::Add { name, target, deadline, icon } => {
            let form = GoalForm {
                name,
                target_amount: target,
                deadline: deadline.as_deref().map(parse_date).transpose()?,
                icon,
            };
            let goal = view.add(client, &form).await.or_say("Failed to add goal")?;
            notify(&Notice::success("Savings goal added successfully"));
            print_json(&serde_json::to_value(goal)?)
        }
        GoalSubcommand::Contribute { id, amount } => {
            let goal = view.contribute(client, &id, &amount).await.or_say("Failed to add contribution")?;
            notify(&Notice::success(format!("{amount} added to goal")));
            print_json(&serde_json::to_value(goal)?)
        }
    }
}

async fn run_dashboard(client: &ApiClient) -> Result<(), CliError> {
    let scope = ViewScope::new();
    match dashboard::load_dashboard(client, &scope)
        .await
        .or_say("Failed to load dashboard")?
    {
        DashboardLoad::Redirected => Ok(()),
        DashboardLoad::NeedsProfile { user } => {
            eprintln!("Welcome, {}. Set up your profile with `fintrack profile setup`.", user.username);
            Ok(())
        }
        DashboardLoad::Ready(data) => print_json(&json!({
            "user": data.user,
            "profile": data.profile,
            "summary": data.summary,
            "insights": data.insights,
        })),
    }
}

fn parse_date(raw: &str) -> Result<NaiveDate, CliError> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").map_err(|_| CliError::InvalidDate(raw.to_owned()))
}

fn notify(notice: &Notice) {
    eprintln!("{notice}");
}

fn print_json(value: &Value) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}
