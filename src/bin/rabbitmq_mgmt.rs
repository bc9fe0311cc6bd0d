//! Command-line front end for the RabbitMQ management client.
//!
//! Every command prints the decoded response as pretty JSON on stdout.
//! Logging goes to stderr and is controlled by `RUST_LOG`.

use clap::{Args, Parser, Subcommand, ValueEnum};
use rabbitmq_management::{
    Client, ClientConfig, Error, HttpMethod, PublishMessage, QueueDefinition,
};
use serde_json::Value;
use std::collections::HashMap;
use std::process::ExitCode;

/// RabbitMQ management CLI
#[derive(Parser)]
#[command(name = "rabbitmq-mgmt")]
#[command(about = "Talk to the RabbitMQ HTTP Management API")]
#[command(version)]
struct Cli {
    #[command(flatten)]
    connection: ConnectionArgs,

    #[command(subcommand)]
    command: Commands,
}

/// Where the management API lives and how to log in
#[derive(Args)]
struct ConnectionArgs {
    /// Base URL of the management API
    #[arg(long, env = "RABBITMQ_MGMT_URL", default_value = rabbitmq_management::config::DEFAULT_BASE_URL)]
    url: String,

    /// Username for Basic authentication
    #[arg(long, short, env = "RABBITMQ_MGMT_USER", default_value = rabbitmq_management::config::DEFAULT_USERNAME)]
    user: String,

    /// Password for Basic authentication
    #[arg(long, short, env = "RABBITMQ_MGMT_PASSWORD", default_value = rabbitmq_management::config::DEFAULT_PASSWORD, hide_default_value = true)]
    password: String,

    /// Request timeout in milliseconds
    #[arg(long, default_value_t = 30000)]
    timeout: u64,
}

/// Available commands
#[derive(Subcommand)]
enum Commands {
    /// Show the cluster overview
    Overview,
    /// Show the authenticated user
    Whoami,
    /// Run the aliveness test against a virtual host
    Aliveness {
        #[arg(default_value = "/")]
        vhost: String,
    },
    /// List resources of one kind
    List {
        resource: Resource,

        /// Restrict to one virtual host, where the resource supports it
        #[arg(long)]
        vhost: Option<String>,
    },
    /// Create a virtual host
    DeclareVhost { name: String },
    /// Delete a virtual host
    DeleteVhost { name: String },
    /// Declare a queue
    DeclareQueue(QueueArgs),
    /// Delete a queue
    DeleteQueue(QueueRef),
    /// Purge all messages from a queue
    PurgeQueue(QueueRef),
    /// Publish a text message to an exchange
    Publish(PublishArgs),
    /// Send a raw request, e.g. `request GET /api/overview`
    Request {
        method: String,
        path: String,

        /// JSON request body
        #[arg(long)]
        body: Option<String>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Resource {
    Vhosts,
    Users,
    Permissions,
    Exchanges,
    Queues,
    Bindings,
    Policies,
    Parameters,
    Nodes,
    Connections,
    Channels,
    Consumers,
}

#[derive(Args)]
struct QueueRef {
    name: String,

    #[arg(long, default_value = "/")]
    vhost: String,
}

#[derive(Args)]
struct QueueArgs {
    #[command(flatten)]
    queue: QueueRef,

    /// Survive broker restarts
    #[arg(long)]
    durable: bool,

    /// Delete when the last consumer goes away
    #[arg(long)]
    auto_delete: bool,
}

#[derive(Args)]
struct PublishArgs {
    exchange: String,
    routing_key: String,
    payload: String,

    #[arg(long, default_value = "/")]
    vhost: String,
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(cli) {
        Ok(value) => {
            match serde_json::to_string_pretty(&value) {
                Ok(text) => println!("{}", text),
                Err(e) => println!("{}", e),
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<Value, Error> {
    let config = ClientConfig::default()
        .with_base_url(cli.connection.url)
        .with_credentials(cli.connection.user, cli.connection.password)
        .with_timeout(cli.connection.timeout);
    let client = Client::new(config)?;
    log::debug!("Using management API at {}", client.config().base_url);

    match cli.command {
        Commands::Overview => client.overview(),
        Commands::Whoami => client.whoami(),
        Commands::Aliveness { vhost } => client.aliveness_test(&vhost),
        Commands::List { resource, vhost } => list(&client, resource, vhost.as_deref()),
        Commands::DeclareVhost { name } => client.vhosts().create(&name),
        Commands::DeleteVhost { name } => client.vhosts().delete(&name),
        Commands::DeclareQueue(args) => client.queues().create(
            &args.queue.vhost,
            &args.queue.name,
            QueueDefinition::new()
                .durable(args.durable)
                .auto_delete(args.auto_delete),
        ),
        Commands::DeleteQueue(queue) => client.queues().delete(&queue.vhost, &queue.name),
        Commands::PurgeQueue(queue) => client.queues().purge(&queue.vhost, &queue.name),
        Commands::Publish(args) => client.exchanges().publish(
            &args.vhost,
            &args.exchange,
            PublishMessage::text(args.routing_key, args.payload),
        ),
        Commands::Request { method, path, body } => {
            let method = HttpMethod::parse(&method)
                .ok_or_else(|| Error::InvalidInput(format!("Unsupported method: {}", method)))?;
            let body = body
                .map(|text| serde_json::from_str::<Value>(&text))
                .transpose()
                .map_err(|e| Error::InvalidInput(format!("Body is not JSON: {}", e)))?;
            client.send(&path, method, &HashMap::new(), body.as_ref())
        }
    }
}

fn list(client: &Client, resource: Resource, vhost: Option<&str>) -> Result<Value, Error> {
    match resource {
        Resource::Vhosts => client.vhosts().all(),
        Resource::Users => client.users().all(),
        Resource::Permissions => client.permissions().all(),
        Resource::Exchanges => client.exchanges().all(vhost),
        Resource::Queues => client.queues().all(vhost),
        Resource::Bindings => client.bindings().all(vhost),
        Resource::Policies => client.policies().all(vhost),
        Resource::Parameters => client.parameters().all(),
        Resource::Nodes => client.nodes().all(),
        Resource::Connections => client.connections().all(),
        Resource::Channels => client.channels().all(),
        Resource::Consumers => client.consumers().all(vhost),
    }
}
