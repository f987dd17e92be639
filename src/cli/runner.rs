//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, EntityArg};
use crate::config::GatewayConfig;
use crate::error::Result;
use crate::gateway::Gateway;
use serde::Serialize;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        match &self.cli.command {
            Commands::Search {
                entity,
                query,
                page,
                take,
                skip,
            } => {
                self.search(*entity, query, *page, *take, *skip).await
            }
            Commands::Get { entity, id } => self.get(*entity, *id).await,
            Commands::Ping => self.ping().await,
            Commands::Serve { port } => {
                let gateway = self.gateway()?;
                crate::cli::serve(gateway, *port).await
            }
        }
    }

    /// Build a gateway from the environment plus CLI overrides
    fn gateway(&self) -> Result<Gateway> {
        let mut config = GatewayConfig::from_env()?;
        if let Some(base_url) = &self.cli.base_url {
            config.base_url.clone_from(base_url);
        }
        Gateway::new(config)
    }

    async fn search(
        &self,
        entity: EntityArg,
        query: &str,
        page: u32,
        take: u32,
        skip: u32,
    ) -> Result<()> {
        let gateway = self.gateway()?;
        match entity {
            EntityArg::Customers => {
                let customers = gateway.search_customers(query, page, take).await?;
                self.print(&customers)
            }
            EntityArg::Items => {
                let items = gateway.search_items(query, take, skip).await?;
                self.print(&items)
            }
            EntityArg::SalesOrders => {
                let orders = gateway.search_sales_orders(query, take).await?;
                self.print(&orders)
            }
        }
    }

    async fn get(&self, entity: EntityArg, id: i64) -> Result<()> {
        let gateway = self.gateway()?;
        match entity {
            EntityArg::Customers => {
                let customer = gateway.get_customer(id).await?;
                self.print(&customer)
            }
            EntityArg::Items => {
                let item = gateway.get_item(id).await?;
                self.print(&item)
            }
            EntityArg::SalesOrders => {
                let order = gateway.get_sales_order(id).await?;
                self.print(&order)
            }
        }
    }

    async fn ping(&self) -> Result<()> {
        let gateway = self.gateway()?;
        let report = gateway.ping().await?;
        self.print(&report)
    }

    fn print<T: Serialize>(&self, value: &T) -> Result<()> {
        let rendered = if self.cli.pretty {
            serde_json::to_string_pretty(value)?
        } else {
            serde_json::to_string(value)?
        };
        println!("{rendered}");
        Ok(())
    }
}
