//! Startup data: the built-in fixtures and the optional JSON orders file.

use crate::lifecycle::SeedConfig;
use crate::model::{
    Category, CategoryId, Comment, InventoryItem, IssueType, ItemId, Order, OrderStatus, Review, ReviewChannel, ReviewId,
    ReviewStatus, PARTNER_TEAM,
};
use chrono::{Duration, NaiveTime, Utc};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Failed to read seed file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to parse seed file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Everything the actors start with.
#[derive(Debug, Clone)]
pub struct Seeds {
    pub orders: Vec<Order>,
    pub reviews: Vec<Review>,
    pub inventory: Vec<InventoryItem>,
    pub categories: Vec<Category>,
}

impl Seeds {
    pub fn fixtures() -> Self {
        Self {
            orders: fixture_orders(),
            reviews: fixture_reviews(),
            inventory: fixture_inventory(),
            categories: fixture_categories(),
        }
    }

    /// Fixtures, with the orders replaced by the configured file if there is one.
    pub fn from_config(config: &SeedConfig) -> Result<Self, SeedError> {
        let mut seeds = Self::fixtures();
        if let Some(path) = &config.orders_path {
            seeds.orders = load_orders(path)?;
            tracing::info!(path = %path.display(), size = seeds.orders.len(), "Loaded orders seed");
        }
        Ok(seeds)
    }
}

/// Reads a JSON array of orders in the camelCase seed shape.
pub fn load_orders(path: &Path) -> Result<Vec<Order>, SeedError> {
    let contents = std::fs::read_to_string(path).map_err(|source| SeedError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&contents).map_err(|source| SeedError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

struct OrderFixture {
    id: &'static str,
    customer: &'static str,
    items: &'static [&'static str],
    total: f64,
    status: OrderStatus,
    eta: &'static str,
    order_time: &'static str,
    created_at: &'static str,
    rating: Option<u8>,
    complaint: Option<&'static str>,
}

const ORDER_FIXTURES: &[OrderFixture] = &[
    OrderFixture {
        id: "ORD-7574341755",
        customer: "Bobbili Sai Kumar",
        items: &["Breakfast Combo [Mini]"],
        total: 174.0,
        status: OrderStatus::Delivered,
        eta: "Delivered",
        order_time: "10:22 AM",
        created_at: "13 December",
        rating: Some(5),
        complaint: Some("Delay in food handover"),
    },
    OrderFixture {
        id: "ORD-1024",
        customer: "Aarav R.",
        items: &["Organic Paneer", "Farm Greens"],
        total: 820.0,
        status: OrderStatus::Preparing,
        eta: "12:45 PM",
        order_time: "11:30 AM",
        created_at: "14 December",
        rating: None,
        complaint: None,
    },
    OrderFixture {
        id: "ORD-1025",
        customer: "Meera S.",
        items: &["Free-range Eggs", "A2 Milk"],
        total: 640.0,
        status: OrderStatus::Preparing,
        eta: "12:55 PM",
        order_time: "11:45 AM",
        created_at: "14 December",
        rating: Some(4),
        complaint: None,
    },
    OrderFixture {
        id: "ORD-1026",
        customer: "Nikhil D.",
        items: &["Cold-pressed Coconut Oil"],
        total: 420.0,
        status: OrderStatus::Ready,
        eta: "Ready for pickup",
        order_time: "10:00 AM",
        created_at: "14 December",
        rating: None,
        complaint: None,
    },
    OrderFixture {
        id: "ORD-1027",
        customer: "Riya P.",
        items: &["Raw Honey", "Heritage Rice"],
        total: 980.0,
        status: OrderStatus::Ready,
        eta: "Ready for pickup",
        order_time: "09:30 AM",
        created_at: "14 December",
        rating: Some(3),
        complaint: Some("Missing items"),
    },
    OrderFixture {
        id: "ORD-1028",
        customer: "Karthik V.",
        items: &["Sprouted Dal Mix", "Seasonal Veg Box"],
        total: 1150.0,
        status: OrderStatus::PickedUp,
        eta: "Picked up",
        order_time: "08:15 AM",
        created_at: "14 December",
        rating: Some(5),
        complaint: None,
    },
];

/// One delivered, two preparing, two ready and one picked up.
pub fn fixture_orders() -> Vec<Order> {
    ORDER_FIXTURES
        .iter()
        .map(|f| {
            let items: Vec<String> = f.items.iter().map(|item| item.to_string()).collect();
            let mut order = Order::new(f.id, f.customer, items, f.total, f.eta).with_status(f.status);
            order.item_quantities = vec![1; f.items.len()];
            order.order_time = Some(f.order_time.to_string());
            order.created_at = Some(f.created_at.to_string());
            order.rating = f.rating;
            order.complaint = f.complaint.map(str::to_string);
            order
        })
        .collect()
}

fn days_ago(days: i64) -> String {
    (Utc::now() - Duration::days(days)).format("%Y-%m-%d").to_string()
}

fn fixture_reply(id: &str, text: &str, days: i64) -> Comment {
    let date = (Utc::now() - Duration::days(days)).date_naive();
    Comment {
        id: id.to_string(),
        text: text.to_string(),
        timestamp: date.and_time(NaiveTime::MIN).and_utc(),
        author: PARTNER_TEAM.to_string(),
    }
}

#[allow(clippy::too_many_arguments)]
fn review(
    id: &str,
    customer: &str,
    rating: u8,
    title: &str,
    comment: &str,
    days: i64,
    channel: ReviewChannel,
    status: ReviewStatus,
    issue_types: Vec<IssueType>,
    order_id: &str,
    replies: Vec<Comment>,
) -> Review {
    Review {
        id: ReviewId::from(id),
        customer: customer.to_string(),
        rating,
        title: title.to_string(),
        comment: comment.to_string(),
        date: days_ago(days),
        channel,
        status,
        issue_types,
        order_id: Some(order_id.to_string()),
        replies,
        notes: Vec::new(),
    }
}

/// Dates are relative to today so "N days ago" stays meaningful.
pub fn fixture_reviews() -> Vec<Review> {
    use IssueType::*;
    use ReviewChannel::*;
    use ReviewStatus::*;

    vec![
        review(
            "rev-101", "Vineeta Jaiswal", 1, "Poor quality",
            "Incomplete order, too cold. Not good quality. Didn't expect this from Zomato.",
            1, App, New, vec![MissingItems, Taste], "7530992338", vec![],
        ),
        review(
            "rev-102", "Surya", 1, "Delayed order", "Order always gets delayed",
            7, App, New, vec![Delay], "7530992339", vec![],
        ),
        review(
            "rev-103", "Vijaya", 1, "Missing items in 1+1 offer",
            "i didn't get 1 +1 offer i ordered 4 idly and 4 bonda then i should get 8idlies and 8 bonda i didn't get",
            8, App, New, vec![MissingItems, Other], "7530992340", vec![],
        ),
        review(
            "rev-104", "Rahul M.", 4, "Fast pickup",
            "Pickup window is smooth. Would love earlier slots on Saturdays for bulk prep.",
            12, WhatsApp, Responded, vec![], "7530992341",
            vec![fixture_reply(
                "reply-2",
                "Thanks for the feedback! We're exploring earlier Saturday slots. Will update you soon.",
                11,
            )],
        ),
        review(
            "rev-105", "Priya K.", 5, "Great food",
            "The food quality is excellent. Loved the idli and dosa. Will order again!",
            14, App, Resolved, vec![], "7530992342",
            vec![fixture_reply(
                "reply-3",
                "Thank you so much for your kind words! We're glad you enjoyed the food.",
                13,
            )],
        ),
        review(
            "rev-106", "Anjali S.", 2, "Cold food",
            "Food arrived cold. Packaging was not proper. Expected better from this restaurant.",
            3, App, New, vec![Packaging, Taste], "7530992343", vec![],
        ),
        review(
            "rev-107", "Kiran", 3, "Average experience",
            "Food was okay but portion size was less for the price. Delivery was on time though.",
            5, Website, Responded, vec![], "7530992344",
            vec![fixture_reply(
                "reply-4",
                "We appreciate your feedback. We'll work on improving our portion sizes.",
                4,
            )],
        ),
    ]
}

fn item(
    id: &str,
    name: &str,
    category: &str,
    category_id: &str,
    price: f64,
    unit: &str,
    in_stock: bool,
) -> InventoryItem {
    InventoryItem {
        id: ItemId::from(id),
        name: name.to_string(),
        category: category.to_string(),
        category_id: Some(category_id.to_string()),
        price,
        unit: unit.to_string(),
        in_stock,
        brand: None,
        discount: None,
    }
}

pub fn fixture_inventory() -> Vec<InventoryItem> {
    vec![
        item("INV-001", "A2 Cow Milk", "Dairy", "cat-dairy", 120.0, "liter", true),
        item("INV-002", "Free-range Eggs", "Protein", "cat-protein", 12.0, "egg", true),
        item("INV-003", "Cold-pressed Coconut Oil", "Pantry", "cat-pantry", 480.0, "500ml", true),
        item("INV-004", "Seasonal Veg Box", "Produce", "cat-produce", 350.0, "box", true),
        item("INV-005", "Raw Wild Honey", "Pantry", "cat-pantry", 320.0, "350g", false),
        item("INV-006", "Heritage Red Rice", "Grains", "cat-pantry", 180.0, "kg", true),
    ]
}

fn category(id: &str, title: &str, description: &str) -> Category {
    Category {
        id: CategoryId::from(id),
        title: title.to_string(),
        description: description.to_string(),
    }
}

pub fn fixture_categories() -> Vec<Category> {
    vec![
        category(
            "cat-dairy",
            "Dairy & Essentials",
            "A2 milk, cultured paneer, and probiotic curd from grass-fed cows.",
        ),
        category(
            "cat-produce",
            "Seasonal Produce",
            "Harvested within 12 hours, focused on greens and root vegetables.",
        ),
        category(
            "cat-pantry",
            "Pantry Staples",
            "Cold-pressed oils, wild honey, stone-ground flours, and heritage grains.",
        ),
        category(
            "cat-protein",
            "Proteins",
            "Free-range eggs and sprouted lentil mixes ready for weekly prep.",
        ),
    ]
}
