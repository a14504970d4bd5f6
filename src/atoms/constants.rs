// ── Showroom Atoms: Catalogs ───────────────────────────────────────────────
// Fixed catalogs the synthetic data generators draw from. Pure data.

// ── People ─────────────────────────────────────────────────────────────────

pub const FIRST_NAMES: &[&str] = &[
    "James", "Michael", "David", "Robert", "Sarah", "Jessica", "Jennifer", "Lisa",
    "Daniel", "Christopher", "Emily", "Amanda", "Michelle", "Lauren", "John",
    "Mark", "Anthony", "Donald", "Maria", "Sandra", "Ashley", "Katherine",
    "Richard", "Thomas", "Brian", "Charles", "Karen", "Nancy", "Betty",
];

pub const LAST_NAMES: &[&str] = &[
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis",
    "Rodriguez", "Martinez", "Hernandez", "Lopez", "Gonzalez", "Wilson", "Anderson",
    "Thomas", "Taylor", "Moore", "Jackson", "Martin", "Lee", "Perez", "Thompson",
    "White", "Harris", "Sanchez", "Clark", "Ramirez", "Lewis", "Robinson",
];

pub const SALESPERSON_NAMES: &[&str] = &[
    "Dylan",
    "Mat in the Hat",
    "Martin",
    "Erik",
    "Juan the only Juan",
    "Shelly",
    "Darrell",
    "Chad GPT",
];

// ── New-vehicle inventory (post-purchase demo) ─────────────────────────────

pub const SUBARU_MODELS: &[&str] = &["Outback", "Forester", "Crosstrek", "Ascent", "Legacy"];

pub const SUBARU_TRIMS: &[&str] = &["Base", "Premium", "Limited", "Touring", "Wilderness"];

pub const SUBARU_COLORS: &[&str] = &[
    "Pearl White",
    "Magnetite Gray",
    "Deep Sea Blue",
    "Autumn Green",
    "Abyss Blue",
    "Crystal Black",
];

// ── Used-vehicle market (lead demo) ────────────────────────────────────────

pub const MAKES: &[&str] = &[
    "Toyota", "Honda", "Ford", "Chevrolet", "Nissan", "Subaru", "Hyundai", "Mazda",
    "Volkswagen", "Kia",
];

pub const MODELS: &[&str] = &[
    "Camry", "Accord", "F-150", "Silverado", "Altima", "Outback", "Elantra", "CX-5",
    "Jetta", "Forte",
];

pub const TRIMS: &[&str] = &["Base", "LX", "EX", "Limited", "Premium", "Sport", "Touring"];

pub const COLORS: &[&str] = &["White", "Black", "Silver", "Gray", "Blue", "Red", "Green"];

// ── Lead inquiry templates ─────────────────────────────────────────────────

pub const WEBSITE_MESSAGES: &[&str] = &[
    "Is this still available?",
    "Can you tell me more about this one?",
    "Interested in this vehicle, what's the next step?",
    "Would like to schedule a test drive",
    "Is this vehicle in stock?",
    "Can I get more details on this?",
];

pub const THIRD_PARTY_MESSAGES: &[&str] = &[
    "Checking availability",
    "Is this still available?",
    "Interested in this vehicle",
    "Would like more information",
];

pub const EMAIL_PROVIDERS: &[&str] = &["gmail.com", "yahoo.com", "hotmail.com", "outlook.com"];

pub const STOCK_PREFIXES: &[&str] = &["SU", "VH", "NW", "US"];

/// Fixed personality handed to the simulated-customer webhook.
pub const CUSTOMER_PERSONALITY: &str = "neutral, realistic dealership customer";

/// Canonical stop sentinel recognized across the webhook contract.
pub const STOP_SENTINEL: &str = "STOP";
