//! Built-in categories shipped with the app.

use crate::models::bracket::BracketSize;
use crate::models::definition::BuiltInBracket;

/// All built-in categories, in menu order. The first entry is the fallback for unknown keys.
pub static BUILT_IN_BRACKETS: [BuiltInBracket; 13] = [
    BuiltInBracket {
        key: "fizzy",
        label: "Top Fizzy Drinks",
        size: BracketSize::Ten,
        options: &[
            "Coca-Cola Original",
            "Pepsi Max",
            "Fanta Orange",
            "Irn-Bru",
            "Sprite",
            "Dr Pepper",
            "Diet Coke",
            "Red Bull",
            "Pepsi",
            "Coke Zero Sugar",
            "7UP",
            "Fanta Lemon",
            "Lucozade Energy Original",
            "Vimto Fizzy",
            "Tango Orange",
            "Sanpellegrino Lemon",
        ],
        must_start: &[],
    },
    BuiltInBracket {
        key: "choc",
        label: "Top Chocolate Bars",
        size: BracketSize::Ten,
        options: &[
            "Cadbury Dairy Milk",
            "KitKat",
            "Mars",
            "Snickers",
            "Twix",
            "Galaxy",
            "Yorkie",
            "Bounty",
            "Crunchie",
            "Wispa",
            "Aero",
            "Milky Way",
            "Lion",
            "Double Decker",
            "Flake",
            "Maltesers Bar",
        ],
        must_start: &[],
    },
    BuiltInBracket {
        key: "sweets",
        label: "Top UK Sweets",
        size: BracketSize::Ten,
        options: &[
            "Haribo Starmix",
            "Wine Gums",
            "Jelly Babies",
            "Fruit Pastilles",
            "Skittles",
            "Starburst",
            "Drumstick Squashies",
            "Love Hearts",
            "Refreshers",
            "Percy Pigs",
            "Maoam Stripes",
            "Dolly Mixture",
            "Parma Violets",
            "Millions",
            "Jelly Tots",
            "Sour Patch Kids",
        ],
        must_start: &[],
    },
    BuiltInBracket {
        key: "rnb",
        label: "Top 10 R&B Artists",
        size: BracketSize::Ten,
        options: &[
            "Beyoncé",
            "Rihanna",
            "Usher",
            "The Weeknd",
            "SZA",
            "Alicia Keys",
            "Mary J. Blige",
            "Brandy",
            "Monica",
            "Ne-Yo",
            "Miguel",
            "Frank Ocean",
            "Toni Braxton",
            "Mariah Carey",
            "Aaliyah",
            "Boyz II Men",
        ],
        must_start: &[],
    },
    BuiltInBracket {
        key: "pop",
        label: "Top 10 Pop Artists",
        size: BracketSize::Ten,
        options: &[
            "Ariana Grande",
            "Taylor Swift",
            "Olivia Rodrigo",
            "Dua Lipa",
            "Billie Eilish",
            "Camila Cabello",
            "Katy Perry",
            "Lady Gaga",
            "Rihanna",
            "Selena Gomez",
        ],
        must_start: &[],
    },
    BuiltInBracket {
        key: "guy",
        label: "Type of Guy You Like",
        size: BracketSize::Eleven,
        options: &[
            "Rich Guy",
            "Tall Guy",
            "Funny Guy",
            "Well-Educated Guy",
            "Athletic Muscular Guy",
            "Romantic Guy",
            "Short King",
            "Confident Guy",
            "Protective Guy",
            "Ambitious Guy",
            "Stylish Guy",
        ],
        must_start: &["Tall Guy"],
    },
    BuiltInBracket {
        key: "girl",
        label: "Type of Girl You Like",
        size: BracketSize::Twelve,
        options: &[
            "Tall Girl",
            "Pretty Girl",
            "Curvy Girl",
            "Loud Girl",
            "Supportive Girl",
            "Rich Girl",
            "High-Maintenance Girl",
            "Materialistic Girl",
            "Petite Girl",
            "Well-Educated Girl",
            "Short Girl",
            "Athletic Girl",
        ],
        must_start: &["Curvy Girl", "Pretty Girl"],
    },
    BuiltInBracket {
        key: "matters",
        label: "💡 What Matters Most (Top 12)",
        size: BracketSize::Twelve,
        options: &[
            "Money 💰",
            "Love ❤️",
            "Looks 👀",
            "Personality 💬",
            "Loyalty 🤝",
            "Respect 🙌",
            "Ambition 🚀",
            "Peace of Mind ☁️",
            "Trust 🔒",
            "Street Smart 🧢",
            "Book Smart 📚",
            "Communication 💭",
        ],
        must_start: &["Looks 👀", "Personality 💬"],
    },
    BuiltInBracket {
        key: "fwds",
        label: "⚽ Forwards (Top 12)",
        size: BracketSize::Twelve,
        options: &[
            "Lionel Messi",
            "Cristiano Ronaldo",
            "Kylian Mbappé",
            "Erling Haaland",
            "Neymar Jr",
            "Mohamed Salah",
            "Harry Kane",
            "Karim Benzema",
            "Vinícius Jr",
            "Robert Lewandowski",
            "Marcus Rashford",
            "Olivier Giroud",
        ],
        must_start: &[],
    },
    BuiltInBracket {
        key: "str",
        label: "🎯 Strikers (Top 12)",
        size: BracketSize::Twelve,
        options: &[
            "Erling Haaland",
            "Kylian Mbappé",
            "Harry Kane",
            "Karim Benzema",
            "Robert Lewandowski",
            "Victor Osimhen",
            "Lautaro Martínez",
            "Gabriel Jesus",
            "Darwin Núñez",
            "Romelu Lukaku",
            "Olivier Giroud",
            "Alexander Isak",
        ],
        must_start: &[],
    },
    BuiltInBracket {
        key: "mids",
        label: "🎨 Midfielders (Top 12)",
        size: BracketSize::Twelve,
        options: &[
            "Kevin De Bruyne",
            "Jude Bellingham",
            "Luka Modrić",
            "Toni Kroos",
            "Bruno Fernandes",
            "Martin Ødegaard",
            "Rodri Hernández",
            "Pedri",
            "Gavi",
            "Bernardo Silva",
            "Declan Rice",
            "Federico Valverde",
        ],
        must_start: &[],
    },
    BuiltInBracket {
        key: "defs",
        label: "🛡️ Defenders (Top 12)",
        size: BracketSize::Twelve,
        options: &[
            "Virgil van Dijk",
            "Sergio Ramos",
            "Trent Alexander-Arnold",
            "João Cancelo",
            "Achraf Hakimi",
            "Antonio Rüdiger",
            "Rúben Dias",
            "Kyle Walker",
            "Theo Hernández",
            "David Alaba",
            "Ronald Araújo",
            "Raphaël Varane",
        ],
        must_start: &[],
    },
    BuiltInBracket {
        key: "gks",
        label: "🧤 Goalkeepers (Top 12)",
        size: BracketSize::Twelve,
        options: &[
            "Alisson Becker",
            "Ederson Moraes",
            "Thibaut Courtois",
            "Manuel Neuer",
            "Marc-André ter Stegen",
            "Emiliano “Dibu” Martínez",
            "Jan Oblak",
            "Aaron Ramsdale",
            "Mike Maignan",
            "Andre Onana",
            "Gianluigi Donnarumma",
            "David de Gea",
        ],
        must_start: &[],
    },
];

/// Look up a built-in category by key.
pub fn built_in(key: &str) -> Option<&'static BuiltInBracket> {
    BUILT_IN_BRACKETS.iter().find(|b| b.key == key)
}
