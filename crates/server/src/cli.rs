use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[clap(name = "repcal server")]
pub struct Cli {
    #[clap(long, env, default_value = "repcal.sqlite")]
    pub sqlite_connection_string: String,
    #[clap(long, env, default_value = "8080")]
    pub port: u16,
    #[clap(long, env, default_value = "127.0.0.1")]
    pub bind_addr: String,

    /// Upstream API the warm-up suggestions on the calendar view come from
    #[arg(long, env, default_value = "https://api.api-ninjas.com/v1/exercises")]
    pub warmup_api_url: String,
    #[arg(long, env)]
    pub warmup_api_key: Option<String>,
    #[arg(long, env, default_value = "5")]
    pub warmup_timeout_seconds: u64,

    /// Deletes the database before starting the main program for debug purposes
    #[arg(long, env, default_value = "false")]
    pub debug_delete_database: bool,
}
