// Database seeding: reset the schema and load the embedded dataset

use sqlx::{postgres::PgConnectOptions, Connection, PgConnection};
use tracing::{error, info, warn};

use crate::auth;
use crate::db::schema;
use crate::error::{SeedError, StepResultExt};
use crate::seed_data::{SeedCustomer, SeedData, SeedInvoice, SeedRevenue, SeedUser};

/// Rows written by a successful run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SeedSummary {
    pub users: usize,
    pub customers: usize,
    pub invoices: usize,
    pub revenue: usize,
}

/// Open a fresh connection, seed, and close the connection on every exit path.
///
/// Nothing is wrapped in a transaction: a failure part way through leaves
/// whatever earlier statements already did in place.
pub async fn seed_database(
    options: &PgConnectOptions,
    data: &SeedData,
) -> Result<SeedSummary, SeedError> {
    let result = match PgConnection::connect_with(options).await {
        Ok(mut conn) => {
            let result = seed(&mut conn, data).await;

            if let Err(e) = conn.close().await {
                warn!(error = %e, "Failed to close database connection");
            }

            result
        }
        Err(e) => Err(SeedError::Connect(e)),
    };

    match &result {
        Ok(summary) => info!(
            users = summary.users,
            customers = summary.customers,
            invoices = summary.invoices,
            revenue = summary.revenue,
            "Database seeded"
        ),
        Err(e) => error!(error = %e, "Seeding error"),
    }

    result
}

/// Run the full drop/create/insert sequence on an existing connection
pub async fn seed(conn: &mut PgConnection, data: &SeedData) -> Result<SeedSummary, SeedError> {
    reset_schema(conn).await?;

    Ok(SeedSummary {
        users: insert_users(conn, &data.users).await?,
        customers: insert_customers(conn, &data.customers).await?,
        invoices: insert_invoices(conn, &data.invoices).await?,
        revenue: insert_revenue(conn, &data.revenue).await?,
    })
}

// Drop every table, then recreate them empty
pub async fn reset_schema(conn: &mut PgConnection) -> Result<(), SeedError> {
    for statement in schema::DROP_TABLES {
        sqlx::query(statement)
            .execute(&mut *conn)
            .await
            .step("drop table")?;
    }

    for statement in schema::CREATE_TABLES {
        sqlx::query(statement)
            .execute(&mut *conn)
            .await
            .step("create table")?;
    }

    info!("Recreated users, customers, invoices and revenue tables");
    Ok(())
}

// Hash and insert users one at a time
pub async fn insert_users(conn: &mut PgConnection, users: &[SeedUser]) -> Result<usize, SeedError> {
    for user in users {
        let password = user.password;
        let hashed = tokio::task::spawn_blocking(move || auth::hash_password(password))
            .await
            .map_err(|e| SeedError::Hash(e.to_string()))?
            .map_err(|e| SeedError::Hash(format!("{:#}", e)))?;

        sqlx::query("INSERT INTO users (name, email, password) VALUES ($1, $2, $3)")
            .bind(user.name)
            .bind(user.email)
            .bind(&hashed)
            .execute(&mut *conn)
            .await
            .step("insert user")?;
    }

    info!("Seeded {} users", users.len());
    Ok(users.len())
}

// Customers keep their literal ids; invoices point at them
pub async fn insert_customers(
    conn: &mut PgConnection,
    customers: &[SeedCustomer],
) -> Result<usize, SeedError> {
    for customer in customers {
        sqlx::query(
            "INSERT INTO customers (id, name, email, image_url) VALUES ($1, $2, $3, $4)",
        )
        .bind(customer.id)
        .bind(customer.name)
        .bind(customer.email)
        .bind(customer.image_url)
        .execute(&mut *conn)
        .await
        .step("insert customer")?;
    }

    info!("Seeded {} customers", customers.len());
    Ok(customers.len())
}

pub async fn insert_invoices(
    conn: &mut PgConnection,
    invoices: &[SeedInvoice],
) -> Result<usize, SeedError> {
    for invoice in invoices {
        sqlx::query(
            "INSERT INTO invoices (customer_id, amount, status, date) VALUES ($1, $2, $3, $4)",
        )
        .bind(invoice.customer_id)
        .bind(invoice.amount)
        .bind(invoice.status.as_str())
        .bind(invoice.date)
        .execute(&mut *conn)
        .await
        .step("insert invoice")?;
    }

    info!("Seeded {} invoices", invoices.len());
    Ok(invoices.len())
}

pub async fn insert_revenue(
    conn: &mut PgConnection,
    revenue: &[SeedRevenue],
) -> Result<usize, SeedError> {
    for rev in revenue {
        sqlx::query("INSERT INTO revenue (month, income) VALUES ($1, $2)")
            .bind(rev.month)
            .bind(rev.revenue)
            .execute(&mut *conn)
            .await
            .step("insert revenue")?;
    }

    info!("Seeded {} revenue rows", revenue.len());
    Ok(revenue.len())
}
