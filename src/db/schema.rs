// Table definitions for the seeded database
//
// Drop order is dependents first (invoices references customers); create
// order is the reverse so the foreign key target always exists.

pub const DROP_TABLES: [&str; 4] = [
    "DROP TABLE IF EXISTS invoices",
    "DROP TABLE IF EXISTS customers",
    "DROP TABLE IF EXISTS users",
    "DROP TABLE IF EXISTS revenue",
];

pub const CREATE_USERS: &str = r#"
    CREATE TABLE users (
        id SERIAL PRIMARY KEY,
        name TEXT NOT NULL,
        email TEXT UNIQUE NOT NULL,
        password TEXT NOT NULL
    )
"#;

pub const CREATE_CUSTOMERS: &str = r#"
    CREATE TABLE customers (
        id SERIAL PRIMARY KEY,
        name TEXT NOT NULL,
        email TEXT UNIQUE NOT NULL,
        image_url TEXT
    )
"#;

pub const CREATE_INVOICES: &str = r#"
    CREATE TABLE invoices (
        id SERIAL PRIMARY KEY,
        customer_id INT REFERENCES customers(id),
        amount INT NOT NULL,
        status TEXT CHECK (status IN ('pending', 'paid')),
        date DATE NOT NULL
    )
"#;

pub const CREATE_REVENUE: &str = r#"
    CREATE TABLE revenue (
        id SERIAL PRIMARY KEY,
        month TEXT NOT NULL,
        income INT NOT NULL
    )
"#;

pub const CREATE_TABLES: [&str; 4] = [
    CREATE_USERS,
    CREATE_CUSTOMERS,
    CREATE_INVOICES,
    CREATE_REVENUE,
];
