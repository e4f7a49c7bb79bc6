// Embedded sample data written by the seeder

use chrono::NaiveDate;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedUser {
    pub name: &'static str,
    pub email: &'static str,
    /// Plaintext; hashed before it reaches the database
    pub password: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedCustomer {
    /// Inserted as-is so invoices can reference it
    pub id: i32,
    pub name: &'static str,
    pub email: &'static str,
    pub image_url: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvoiceStatus {
    Pending,
    Paid,
}

impl InvoiceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            InvoiceStatus::Pending => "pending",
            InvoiceStatus::Paid => "paid",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedInvoice {
    pub customer_id: i32,
    /// Minor currency units (cents)
    pub amount: i32,
    pub status: InvoiceStatus,
    pub date: NaiveDate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedRevenue {
    pub month: &'static str,
    /// Stored in the `income` column
    pub revenue: i32,
}

/// Everything one seeding run inserts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedData {
    pub users: Vec<SeedUser>,
    pub customers: Vec<SeedCustomer>,
    pub invoices: Vec<SeedInvoice>,
    pub revenue: Vec<SeedRevenue>,
}

impl SeedData {
    /// The dataset served by `GET /seed`
    pub fn placeholder() -> Self {
        Self {
            users: USERS.to_vec(),
            customers: CUSTOMERS.to_vec(),
            invoices: INVOICES.to_vec(),
            revenue: REVENUE.to_vec(),
        }
    }
}

// Evaluated at compile time, so an invalid literal fails the build
const fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    match NaiveDate::from_ymd_opt(year, month, day) {
        Some(date) => date,
        None => panic!("invalid seed date"),
    }
}

const USERS: [SeedUser; 1] = [SeedUser {
    name: "User",
    email: "user@nextmail.com",
    password: "123456",
}];

const CUSTOMERS: [SeedCustomer; 6] = [
    SeedCustomer {
        id: 1,
        name: "Evil Rabbit",
        email: "evil@rabbit.com",
        image_url: Some("/customers/evil-rabbit.png"),
    },
    SeedCustomer {
        id: 2,
        name: "Delba de Oliveira",
        email: "delba@oliveira.com",
        image_url: Some("/customers/delba-de-oliveira.png"),
    },
    SeedCustomer {
        id: 3,
        name: "Lee Robinson",
        email: "lee@robinson.com",
        image_url: Some("/customers/lee-robinson.png"),
    },
    SeedCustomer {
        id: 4,
        name: "Michael Novotny",
        email: "michael@novotny.com",
        image_url: Some("/customers/michael-novotny.png"),
    },
    SeedCustomer {
        id: 5,
        name: "Amy Burns",
        email: "amy@burns.com",
        image_url: Some("/customers/amy-burns.png"),
    },
    SeedCustomer {
        id: 6,
        name: "Balazs Orban",
        email: "balazs@orban.com",
        image_url: None,
    },
];

const INVOICES: [SeedInvoice; 13] = [
    SeedInvoice {
        customer_id: 1,
        amount: 15795,
        status: InvoiceStatus::Pending,
        date: ymd(2022, 12, 6),
    },
    SeedInvoice {
        customer_id: 2,
        amount: 20348,
        status: InvoiceStatus::Pending,
        date: ymd(2022, 11, 14),
    },
    SeedInvoice {
        customer_id: 5,
        amount: 3040,
        status: InvoiceStatus::Paid,
        date: ymd(2022, 10, 29),
    },
    SeedInvoice {
        customer_id: 4,
        amount: 44800,
        status: InvoiceStatus::Paid,
        date: ymd(2023, 9, 10),
    },
    SeedInvoice {
        customer_id: 6,
        amount: 34577,
        status: InvoiceStatus::Pending,
        date: ymd(2023, 8, 5),
    },
    SeedInvoice {
        customer_id: 3,
        amount: 54246,
        status: InvoiceStatus::Pending,
        date: ymd(2023, 7, 16),
    },
    SeedInvoice {
        customer_id: 1,
        amount: 666,
        status: InvoiceStatus::Pending,
        date: ymd(2023, 6, 27),
    },
    SeedInvoice {
        customer_id: 4,
        amount: 32545,
        status: InvoiceStatus::Paid,
        date: ymd(2023, 6, 9),
    },
    SeedInvoice {
        customer_id: 5,
        amount: 1250,
        status: InvoiceStatus::Paid,
        date: ymd(2023, 6, 17),
    },
    SeedInvoice {
        customer_id: 6,
        amount: 8546,
        status: InvoiceStatus::Paid,
        date: ymd(2023, 6, 7),
    },
    SeedInvoice {
        customer_id: 2,
        amount: 500,
        status: InvoiceStatus::Paid,
        date: ymd(2023, 8, 19),
    },
    SeedInvoice {
        customer_id: 6,
        amount: 8945,
        status: InvoiceStatus::Paid,
        date: ymd(2023, 6, 3),
    },
    SeedInvoice {
        customer_id: 3,
        amount: 1000,
        status: InvoiceStatus::Paid,
        date: ymd(2022, 6, 5),
    },
];

const REVENUE: [SeedRevenue; 12] = [
    SeedRevenue {
        month: "Jan",
        revenue: 2000,
    },
    SeedRevenue {
        month: "Feb",
        revenue: 1800,
    },
    SeedRevenue {
        month: "Mar",
        revenue: 2200,
    },
    SeedRevenue {
        month: "Apr",
        revenue: 2500,
    },
    SeedRevenue {
        month: "May",
        revenue: 2300,
    },
    SeedRevenue {
        month: "Jun",
        revenue: 3200,
    },
    SeedRevenue {
        month: "Jul",
        revenue: 3500,
    },
    SeedRevenue {
        month: "Aug",
        revenue: 3700,
    },
    SeedRevenue {
        month: "Sep",
        revenue: 2500,
    },
    SeedRevenue {
        month: "Oct",
        revenue: 2800,
    },
    SeedRevenue {
        month: "Nov",
        revenue: 3000,
    },
    SeedRevenue {
        month: "Dec",
        revenue: 4800,
    },
];
