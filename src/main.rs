mod catalog;
mod fixtures;
mod geocode;
mod loader;
mod models;
mod store;
mod suggest;

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use geocode::provider_from_env;
use loader::{apply_mutation, load_collection, CollectionView};
use models::Origin;
use store::{DocumentStore, MemoryStore};
use suggest::Suggester;

#[derive(Parser)]
#[command(name = "gigmatch")]
#[command(about = "Gig marketplace suggestion matching and resilient data loading")]
struct Cli {
    /// Skip the simulated suggestion latency
    #[arg(long, global = true)]
    instant: bool,

    /// Print results as JSON instead of tables
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Suggestion lookups against the fixed catalogs
    Suggest {
        #[command(subcommand)]
        command: SuggestCommands,
    },

    /// Resolve one place by id through the configured location provider
    Place {
        /// Place id
        id: String,
    },

    /// List open job postings (demo data when the store is empty)
    Jobs,

    /// List a worker's applications (demo data when the store is empty)
    Applications {
        /// Worker id
        #[arg(short, long, default_value = "demo-worker-1")]
        worker: String,
    },

    /// Browse and act on pending job requests
    Requests {
        #[command(subcommand)]
        command: RequestCommands,
    },
}

#[derive(Subcommand)]
enum SuggestCommands {
    /// Job-title completions
    Titles {
        /// Partial query; empty shows the browse default
        #[arg(default_value = "")]
        query: String,
    },

    /// Skill completions, optionally biased by a chosen job title
    Skills {
        /// Partial query; empty shows the full ranked list
        #[arg(default_value = "")]
        query: String,

        /// Job title used to boost matching skill categories
        #[arg(short, long, default_value = "")]
        job_title: String,
    },

    /// Location completions via the configured provider
    Locations {
        /// Partial query; empty shows the browse default
        #[arg(default_value = "")]
        query: String,
    },

    /// Popular job titles, overall or within one category
    Popular {
        /// Restrict to one catalog category
        #[arg(short, long)]
        category: Option<String>,
    },
}

#[derive(Subcommand)]
enum RequestCommands {
    /// List pending job requests
    List,

    /// Accept a job request
    Accept {
        /// Request id
        id: String,

        /// Vendor accepting the request
        #[arg(short, long, default_value = "vendor-1")]
        vendor: String,
    },

    /// Reject a job request
    Reject {
        /// Request id
        id: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .init();

    let cli = Cli::parse();
    let suggester = if cli.instant {
        Suggester::instant()
    } else {
        Suggester::new()
    };

    match cli.command {
        Commands::Suggest { command } => match command {
            SuggestCommands::Titles { query } => {
                let results = suggester.job_titles(&query).await;
                if cli.json {
                    println!("{}", serde_json::to_string_pretty(&results)?);
                } else if results.is_empty() {
                    println!("No matching job titles.");
                } else {
                    println!("{:<30} {:<15} {}", "TITLE", "CATEGORY", "DESCRIPTION");
                    println!("{}", "-".repeat(90));
                    for entry in results {
                        println!(
                            "{:<30} {:<15} {}",
                            truncate(&entry.title, 28),
                            entry.category,
                            truncate(&entry.description, 44)
                        );
                    }
                }
            }

            SuggestCommands::Skills { query, job_title } => {
                let results = suggester.skills(&query, &job_title).await;
                if cli.json {
                    println!("{}", serde_json::to_string_pretty(&results)?);
                } else if results.is_empty() {
                    println!("No matching skills.");
                } else {
                    println!("{:<25} {:<15} {:>9}", "SKILL", "CATEGORY", "RELEVANCE");
                    println!("{}", "-".repeat(51));
                    for entry in results {
                        println!(
                            "{:<25} {:<15} {:>9.2}",
                            truncate(&entry.skill, 23),
                            entry.category,
                            entry.relevance
                        );
                    }
                }
            }

            SuggestCommands::Locations { query } => {
                let provider = provider_from_env(suggester);
                let results = provider.autocomplete(&query).await;
                if cli.json {
                    println!("{}", serde_json::to_string_pretty(&results)?);
                } else if results.is_empty() {
                    println!("No matching locations.");
                } else {
                    println!("{:<8} {:<30} {}", "ID", "DESCRIPTION", "ADDRESS");
                    println!("{}", "-".repeat(70));
                    for entry in results {
                        println!(
                            "{:<8} {:<30} {}",
                            entry.place_id,
                            truncate(&entry.description, 28),
                            entry.formatted_address
                        );
                    }
                }
            }

            SuggestCommands::Popular { category } => {
                let results = suggester.popular_job_titles(category.as_deref()).await;
                if cli.json {
                    println!("{}", serde_json::to_string_pretty(&results)?);
                } else if results.is_empty() {
                    println!("No titles in that category.");
                } else {
                    for entry in results {
                        println!("{:<30} [{}]", entry.title, entry.category);
                    }
                }
            }
        },

        Commands::Place { id } => {
            let provider = provider_from_env(suggester);
            match provider.place_details(&id).await {
                Some(place) => {
                    if cli.json {
                        println!("{}", serde_json::to_string_pretty(&place)?);
                    } else {
                        println!("Place {}", place.place_id);
                        println!("Address: {}", place.formatted_address);
                        if let Some(geometry) = place.geometry {
                            println!("Coordinates: {:.4}, {:.4}", geometry.lat, geometry.lng);
                        }
                        if !place.types.is_empty() {
                            println!("Types: {}", place.types.join(", "));
                        }
                    }
                }
                None => println!("Place '{}' not found.", id),
            }
        }

        Commands::Jobs => {
            let store = MemoryStore::new();
            let loaded =
                load_collection("jobs", store.open_jobs(), fixtures::demo_job_postings()).await;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&loaded.records)?);
            } else {
                if loaded.origin == Origin::Demo {
                    println!("(showing demo data)\n");
                }
                println!(
                    "{:<14} {:<32} {:<12} {:<22} {:>11}",
                    "ID", "TITLE", "TYPE", "LOCATION", "PAY/HR"
                );
                println!("{}", "-".repeat(95));
                for job in &loaded.records {
                    println!(
                        "{:<14} {:<32} {:<12} {:<22} {:>11}",
                        job.id,
                        truncate(&job.title, 30),
                        job.work_type,
                        truncate(&job.location, 20),
                        format!("{}-{}", job.pay_min, job.pay_max)
                    );
                }
            }
        }

        Commands::Applications { worker } => {
            let store = MemoryStore::new();
            let loaded = load_collection(
                "jobApplications",
                store.applications_by_worker(&worker),
                fixtures::demo_applications(),
            )
            .await;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&loaded.records)?);
            } else {
                if loaded.origin == Origin::Demo {
                    println!("(showing demo data)\n");
                }
                println!("{:<12} {:<14} {:<10} {}", "ID", "JOB", "STATUS", "APPLIED");
                println!("{}", "-".repeat(60));
                for app in &loaded.records {
                    println!(
                        "{:<12} {:<14} {:<10} {}",
                        app.id,
                        app.job_id,
                        app.status,
                        app.applied_at.format("%Y-%m-%d %H:%M")
                    );
                }
            }
        }

        Commands::Requests { command } => {
            let store = MemoryStore::new();
            let mut view = CollectionView::new();
            view.refresh(
                "jobRequests",
                store.pending_requests(),
                fixtures::demo_job_requests(),
            )
            .await;

            match command {
                RequestCommands::List => {
                    if cli.json {
                        println!("{}", serde_json::to_string_pretty(view.records())?);
                    } else {
                        if view.origin() == Some(Origin::Demo) {
                            println!("(showing demo data)\n");
                        }
                        println!(
                            "{:<16} {:<32} {:<9} {:<10} {:>11}",
                            "ID", "TITLE", "URGENCY", "STATUS", "PAY/HR"
                        );
                        println!("{}", "-".repeat(82));
                        for request in view.records() {
                            println!(
                                "{:<16} {:<32} {:<9} {:<10} {:>11}",
                                request.id,
                                truncate(&request.title, 30),
                                request.urgency,
                                request.status,
                                format!("{}-{}", request.min_pay, request.max_pay)
                            );
                        }
                    }
                }

                RequestCommands::Accept { id, vendor } => {
                    set_request_status(&store, &mut view, &id, "accepted", Some(&vendor)).await?;
                    println!("Accepted request '{}'.", id);
                }

                RequestCommands::Reject { id } => {
                    set_request_status(&store, &mut view, &id, "rejected", None).await?;
                    println!("Rejected request '{}'.", id);
                }
            }
        }
    }

    Ok(())
}

/// Accept or reject one loaded request. Demo records are updated in view
/// state only; live records go through the store and failures surface to the
/// user.
async fn set_request_status(
    store: &MemoryStore,
    view: &mut CollectionView<models::JobRequest>,
    id: &str,
    status: &str,
    accepted_by: Option<&str>,
) -> Result<()> {
    let origin = view
        .records()
        .iter()
        .find(|r| r.id == id)
        .map(|r| r.origin)
        .ok_or_else(|| anyhow!("Request '{}' not found", id))?;

    apply_mutation(
        origin,
        || {
            if let Some(request) = view.records_mut().iter_mut().find(|r| r.id == id) {
                request.status = status.to_string();
                if status == "accepted" {
                    request.accepted_by = accepted_by.map(|v| v.to_string());
                    request.accepted_at = Some(chrono::Utc::now());
                }
            }
        },
        || async { store.set_request_status(id, status, accepted_by).await },
    )
    .await?;

    Ok(())
}

fn truncate(s: &str, max: usize) -> String {
    if s.len() <= max {
        s.to_string()
    } else {
        format!("{}...", &s[..max.saturating_sub(3)])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a much longer string", 10), "a much ...");
    }

    #[tokio::test]
    async fn test_accepting_demo_request_stays_local() {
        let store = MemoryStore::new();
        let mut view = CollectionView::new();
        view.refresh(
            "jobRequests",
            store.pending_requests(),
            fixtures::demo_job_requests(),
        )
        .await;
        assert_eq!(view.origin(), Some(Origin::Demo));

        set_request_status(&store, &mut view, "demo-request-1", "accepted", Some("v1"))
            .await
            .unwrap();

        let request = view
            .records()
            .iter()
            .find(|r| r.id == "demo-request-1")
            .unwrap();
        assert_eq!(request.status, "accepted");
        assert_eq!(request.accepted_by.as_deref(), Some("v1"));
        // The store was never touched.
        assert!(store.pending_requests().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_unknown_request_id_errors() {
        let store = MemoryStore::new();
        let mut view = CollectionView::new();
        view.refresh(
            "jobRequests",
            store.pending_requests(),
            fixtures::demo_job_requests(),
        )
        .await;

        let err = set_request_status(&store, &mut view, "nope", "accepted", None)
            .await
            .unwrap_err();
        assert!(err.to_string().contains("not found"));
    }
}
