//! Built-in fallback tables, used whenever an external resource is missing
//! or fails validation.

/// Vocabulary grouped by category: `(category, [(term, meaning)])`.
pub(crate) const VOCABULARY: &[(&str, &[(&str, &str)])] = &[
    (
        "keluarga",
        &[
            ("ibu", "mother"),
            ("bapa", "father"),
            ("anak", "child"),
            ("adik", "younger sibling"),
            ("abang", "older brother"),
            ("kakak", "older sister"),
            ("nenek", "grandmother"),
            ("datuk", "grandfather"),
            ("sepupu", "cousin"),
            ("keluarga", "family"),
            ("jiran", "neighbour"),
        ],
    ),
    (
        "makanan",
        &[
            ("chicken rice", "chicken rice"),
            ("laksa", "spicy noodle soup"),
            ("bak chor mee", "minced meat noodles"),
            ("char kway teow", "fried flat noodles"),
            ("satay", "grilled meat skewers"),
            ("rojak", "mixed fruit salad"),
            ("kopi", "coffee"),
            ("teh", "tea"),
            ("nasi lemak", "coconut rice dish"),
            ("teh tarik", "pulled tea"),
            ("susu", "milk"),
            ("pedas", "spicy"),
            ("manis", "sweet"),
            ("sedap", "delicious"),
        ],
    ),
    (
        "tempat",
        &[
            ("rumah", "house"),
            ("sekolah", "school"),
            ("taman", "park"),
            ("perpustakaan", "library"),
            ("pasar", "market"),
            ("bilik", "room"),
            ("dapur", "kitchen"),
            ("muzium", "museum"),
            ("jalan", "road"),
        ],
    ),
    (
        "tempat_singapore",
        &[
            ("kopitiam", "coffee shop"),
            ("void deck", "ground floor of a public housing block"),
            ("hdb", "public housing"),
            ("mrt", "mass rapid transit"),
            ("hawker centre", "food centre"),
            ("orchard road", "shopping street"),
            ("sentosa", "resort island"),
        ],
    ),
    (
        "kata_kerja",
        &[
            ("makan", "eat"),
            ("minum", "drink"),
            ("pergi", "go"),
            ("datang", "come"),
            ("tengok", "look"),
            ("suka", "like"),
            ("cakap", "speak"),
            ("duduk", "sit"),
            ("tidur", "sleep"),
            ("baca", "read"),
            ("tulis", "write"),
            ("beli", "buy"),
            ("tunggu", "wait"),
            ("faham", "understand"),
            ("jumpa", "meet"),
        ],
    ),
    (
        "pengangkutan",
        &[
            ("bas", "bus"),
            ("teksi", "taxi"),
            ("stesen", "station"),
            ("tiket", "ticket"),
            ("peta", "map"),
            ("kereta", "car"),
        ],
    ),
    (
        "masa_waktu",
        &[
            ("sekarang", "now"),
            ("nanti", "later"),
            ("semalam", "yesterday"),
            ("esok", "tomorrow"),
            ("minggu", "week"),
            ("bulan", "month"),
            ("tahun", "year"),
            ("pagi", "morning"),
            ("petang", "afternoon"),
            ("malam", "night"),
        ],
    ),
    (
        "kata_sifat",
        &[
            ("baik", "good"),
            ("besar", "big"),
            ("kecil", "small"),
            ("cantik", "beautiful"),
            ("panas", "hot"),
            ("sejuk", "cold"),
            ("cepat", "fast"),
            ("lambat", "slow"),
            ("mahal", "expensive"),
            ("murah", "cheap"),
        ],
    ),
    (
        "perasaan",
        &[
            ("gembira", "happy"),
            ("sedih", "sad"),
            ("marah", "angry"),
            ("lapar", "hungry"),
            ("haus", "thirsty"),
            ("penat", "tired"),
            ("sibuk", "busy"),
        ],
    ),
    (
        "warna",
        &[
            ("merah", "red"),
            ("biru", "blue"),
            ("hijau", "green"),
            ("kuning", "yellow"),
            ("hitam", "black"),
            ("putih", "white"),
            ("coklat", "brown"),
            ("ungu", "purple"),
        ],
    ),
    (
        "frasa_harian",
        &[
            ("apa khabar", "how are you"),
            ("khabar baik", "I am fine"),
            ("terima kasih", "thank you"),
            ("sama-sama", "you are welcome"),
            ("minta maaf", "sorry"),
            ("berapa harga", "how much"),
            ("jumpa lagi", "see you again"),
            ("jangan risau", "do not worry"),
            ("tumpang tanya", "excuse me (to ask)"),
        ],
    ),
];

/// Topic tables, checked in this order.
pub(crate) const TOPICS: &[(&str, &[&str])] = &[
    (
        "food",
        &[
            "makan",
            "makanan",
            "lapar",
            "sedap",
            "chicken rice",
            "nasi lemak",
            "laksa",
            "bak chor mee",
            "kopitiam",
            "hawker",
            "food",
        ],
    ),
    (
        "location",
        &[
            "rumah",
            "sekolah",
            "singapore",
            "singapura",
            "tempat",
            "di mana",
            "mrt",
            "orchard",
            "void deck",
            "hdb",
            "sentosa",
        ],
    ),
    (
        "family",
        &["ibu", "bapa", "anak", "keluarga", "adik", "abang", "kakak", "family"],
    ),
    (
        "learning",
        &["belajar", "ajar", "buku", "bahasa", "study", "learn", "practice"],
    ),
];

pub(crate) const POSITIVE: &[&str] = &[
    "bagus", "best", "shiok", "gembira", "senang", "seronok", "good", "great", "love", "nice",
    "happy",
];

pub(crate) const NEGATIVE: &[&str] = &[
    "sedih", "marah", "bosan", "sakit", "penat", "tak suka", "teruk", "bad", "sad", "angry",
    "tired", "boring",
];

pub(crate) const QUESTION: &[&str] = &[
    "apa", "siapa", "kenapa", "mengapa", "mana", "bila", "bagaimana", "berapa", "what", "who",
    "why", "when", "how", "where",
];

pub(crate) const GREETING: &[&str] = &[
    "hello",
    "hi",
    "hai",
    "apa khabar",
    "selamat pagi",
    "selamat petang",
    "selamat malam",
    "selamat datang",
    "assalamualaikum",
];

pub(crate) const FAREWELL: &[&str] = &[
    "bye",
    "goodbye",
    "selamat tinggal",
    "sampai jumpa",
    "jumpa lagi",
];

/// Dishes remembered as a user preference when mentioned.
pub(crate) const DISHES: &[&str] = &[
    "chicken rice",
    "nasi lemak",
    "laksa",
    "bak chor mee",
    "char kway teow",
    "satay",
];

/// Training pairs: `(category, [(trigger, response, translation, pronunciation)])`.
pub(crate) const CORPUS: &[(&str, &[(&str, &str, &str, &str)])] = &[
    (
        "food",
        &[
            (
                "makan",
                "Saya suka makan chicken rice! Anda suka apa?",
                "I like eating chicken rice! What do you like?",
                "sah-yah soo-kah mah-kan chicken rice!",
            ),
            (
                "makanan",
                "Makanan Singapore memang sedap lah!",
                "Singapore food is really delicious!",
                "mah-kah-nan sin-gah-por meh-mang seh-dap lah!",
            ),
            (
                "lapar",
                "Anda lapar ke? Jom pergi kopitiam!",
                "Are you hungry? Let's go to the kopitiam!",
                "an-dah lah-par keh? jom per-gee ko-pee-tee-ahm!",
            ),
            (
                "laksa",
                "Laksa sama bak chor mee, best lah!",
                "Laksa and bak chor mee, the best!",
                "lak-sah sah-mah bak chor mee!",
            ),
        ],
    ),
    (
        "learning",
        &[
            (
                "belajar",
                "Bagus! Teruskan belajar bahasa Melayu!",
                "Good! Keep learning Malay!",
                "bah-goos! teh-roos-kan beh-lah-jar",
            ),
            (
                "pandai",
                "Anda dah pandai! Jangan malu untuk cuba!",
                "You're getting good! Don't be shy to try!",
                "an-dah dah pan-dai!",
            ),
            (
                "bahasa",
                "Bahasa Melayu mudah sahaja. Latihan menjadikan sempurna!",
                "Malay is easy. Practice makes perfect!",
                "bah-hah-sah meh-lah-yoo moo-dah",
            ),
        ],
    ),
    (
        "cultural",
        &[
            (
                "budaya",
                "Singapore memang berbilang budaya lah! Berbagai kaum, satu negara!",
                "Singapore is truly multicultural! Many races, one country!",
                "sin-gah-por meh-mang ber-bee-lang boo-dah-yah lah!",
            ),
            (
                "hari raya",
                "Selamat Hari Raya! Maaf zahir dan batin!",
                "Happy Hari Raya! Forgive me physically and spiritually!",
                "seh-lah-mat hah-ree rah-yah!",
            ),
            (
                "kampong",
                "Semangat kampong adalah budaya kita!",
                "Kampong spirit is our culture!",
                "seh-mah-ngat kam-pong ah-dah-lah boo-dah-yah kee-tah",
            ),
            (
                "majulah",
                "Majulah Singapura!",
                "Onward Singapore!",
                "mah-joo-lah sin-gah-poo-rah!",
            ),
        ],
    ),
    (
        "family",
        &[
            (
                "keluarga",
                "Keluarga sangat penting! Berapa orang dalam keluarga anda?",
                "Family is very important! How many people are in your family?",
                "keh-loo-ar-gah sah-ngat pen-ting!",
            ),
            (
                "ibu",
                "Ibu anda tentu sayang anda!",
                "Your mother surely loves you!",
                "ee-boo an-dah ten-too sah-yang an-dah!",
            ),
            (
                "adik",
                "Anda ada adik? Seronok ada adik-beradik!",
                "Do you have younger siblings? It's fun to have siblings!",
                "ah-dik? seh-ro-nok!",
            ),
        ],
    ),
    (
        "location",
        &[
            (
                "rumah",
                "Rumah anda di mana? Dekat MRT ke?",
                "Where is your house? Near the MRT?",
                "roo-mah an-dah dee mah-nah?",
            ),
            (
                "sekolah",
                "Sekolah anda besar ke? Ada kantin yang sedap?",
                "Is your school big? Does it have a good canteen?",
                "seh-ko-lah an-dah beh-sar keh?",
            ),
        ],
    ),
    (
        "greeting",
        &[
            (
                "hai",
                "Hai! Seronok jumpa anda lagi. Nak sembang tentang apa?",
                "Hi! Nice to see you again. What do you want to chat about?",
                "hai! seh-ro-nok joom-pah an-dah lah-gee",
            ),
            (
                "hello",
                "Hello! Apa cerita hari ini?",
                "Hello! What's the story today?",
                "heh-lo! ah-pah cheh-ree-tah hah-ree ee-nee?",
            ),
            (
                "assalamualaikum",
                "Waalaikumussalam! Apa khabar?",
                "And peace be upon you! How are you?",
                "wah-ah-lai-koo-moos-sah-lam!",
            ),
        ],
    ),
    (
        "goodbye",
        &[
            (
                "selamat tinggal",
                "Selamat tinggal! Jumpa lagi nanti!",
                "Goodbye! See you again later!",
                "seh-lah-mat ting-gal!",
            ),
            (
                "sampai jumpa",
                "Sampai jumpa! Jaga diri baik-baik!",
                "See you! Take good care!",
                "sam-pai joom-pah!",
            ),
        ],
    ),
];
