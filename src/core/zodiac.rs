use chrono::{Datelike, NaiveDate};

use crate::core::error::RuleError;
use crate::models::{Element, MonthDay, SignId, ZodiacSign};

/// The twelve sign records, in zodiac order starting at Aries
pub static ZODIAC_SIGNS: [ZodiacSign; 12] = [
    ZodiacSign {
        id: SignId::Aries,
        name: "Aries",
        symbol: "♈",
        element: Element::Fire,
        ruling_planet: "Mars",
        start: MonthDay::new(3, 21),
        end: MonthDay::new(4, 19),
        dates: "March 21 - April 19",
        traits: &["Courageous", "Energetic", "Willful", "Pioneering", "Independent"],
        description: "Aries is the first sign of the zodiac, and those born under this sign are bold and ambitious. They are natural leaders who are always ready for action.",
        lucky_colors: &["Red", "Orange", "Crimson"],
        lucky_numbers: &[1, 9, 17],
    },
    ZodiacSign {
        id: SignId::Taurus,
        name: "Taurus",
        symbol: "♉",
        element: Element::Earth,
        ruling_planet: "Venus",
        start: MonthDay::new(4, 20),
        end: MonthDay::new(5, 20),
        dates: "April 20 - May 20",
        traits: &["Patient", "Reliable", "Devoted", "Persistent", "Practical"],
        description: "Taurus is known for being reliable, practical, ambitious and sensual. They have an eye for beauty and love to be surrounded by love and material pleasures.",
        lucky_colors: &["Green", "Pink", "Brown"],
        lucky_numbers: &[2, 6, 15],
    },
    ZodiacSign {
        id: SignId::Gemini,
        name: "Gemini",
        symbol: "♊",
        element: Element::Air,
        ruling_planet: "Mercury",
        start: MonthDay::new(5, 21),
        end: MonthDay::new(6, 20),
        dates: "May 21 - June 20",
        traits: &["Adaptable", "Versatile", "Communicative", "Witty", "Intellectual"],
        description: "Gemini is versatile, expressive, and quick-witted. They are excellent communicators and can adapt to any situation.",
        lucky_colors: &["Yellow", "Light Blue", "Orange"],
        lucky_numbers: &[3, 5, 12],
    },
    ZodiacSign {
        id: SignId::Cancer,
        name: "Cancer",
        symbol: "♋",
        element: Element::Water,
        ruling_planet: "Moon",
        start: MonthDay::new(6, 21),
        end: MonthDay::new(7, 22),
        dates: "June 21 - July 22",
        traits: &["Nurturing", "Protective", "Intuitive", "Emotional", "Sympathetic"],
        description: "Cancer is deeply intuitive and sentimental. They are very emotional and sensitive, and care deeply about matters of the family.",
        lucky_colors: &["Silver", "White", "Pearl"],
        lucky_numbers: &[2, 7, 11],
    },
    ZodiacSign {
        id: SignId::Leo,
        name: "Leo",
        symbol: "♌",
        element: Element::Fire,
        ruling_planet: "Sun",
        start: MonthDay::new(7, 23),
        end: MonthDay::new(8, 22),
        dates: "July 23 - August 22",
        traits: &["Creative", "Passionate", "Generous", "Warm-hearted", "Cheerful"],
        description: "Leo is dramatic, creative, self-confident, born to lead and born to entertain. They are natural leaders and have a strong sense of self.",
        lucky_colors: &["Gold", "Orange", "Yellow"],
        lucky_numbers: &[1, 5, 9],
    },
    ZodiacSign {
        id: SignId::Virgo,
        name: "Virgo",
        symbol: "♍",
        element: Element::Earth,
        ruling_planet: "Mercury",
        start: MonthDay::new(8, 23),
        end: MonthDay::new(9, 22),
        dates: "August 23 - September 22",
        traits: &["Analytical", "Kind", "Hardworking", "Practical", "Modest"],
        description: "Virgo is analytical, kind, hardworking and practical. They are perfectionists and pay attention to every detail.",
        lucky_colors: &["Green", "Brown", "Navy Blue"],
        lucky_numbers: &[4, 6, 8],
    },
    ZodiacSign {
        id: SignId::Libra,
        name: "Libra",
        symbol: "♎",
        element: Element::Air,
        ruling_planet: "Venus",
        start: MonthDay::new(9, 23),
        end: MonthDay::new(10, 22),
        dates: "September 23 - October 22",
        traits: &["Diplomatic", "Gracious", "Fair-minded", "Social", "Peaceful"],
        description: "Libra is peaceful, fair, and they hate being alone. Partnership is very important for them, as their mirror and someone to grow with.",
        lucky_colors: &["Pink", "Light Blue", "Lavender"],
        lucky_numbers: &[2, 6, 7],
    },
    ZodiacSign {
        id: SignId::Scorpio,
        name: "Scorpio",
        symbol: "♏",
        element: Element::Water,
        ruling_planet: "Pluto",
        start: MonthDay::new(10, 23),
        end: MonthDay::new(11, 21),
        dates: "October 23 - November 21",
        traits: &["Passionate", "Determined", "Magnetic", "Mysterious", "Strategic"],
        description: "Scorpio is passionate and assertive. They are determined and decisive, and will research until they find out the truth.",
        lucky_colors: &["Deep Red", "Black", "Maroon"],
        lucky_numbers: &[4, 8, 11],
    },
    ZodiacSign {
        id: SignId::Sagittarius,
        name: "Sagittarius",
        symbol: "♐",
        element: Element::Fire,
        ruling_planet: "Jupiter",
        start: MonthDay::new(11, 22),
        end: MonthDay::new(12, 21),
        dates: "November 22 - December 21",
        traits: &["Optimistic", "Adventurous", "Independent", "Honest", "Philosophical"],
        description: "Sagittarius is optimistic, loves freedom, and exploration. They are enthusiastic, extroverted, and always ready for an adventure.",
        lucky_colors: &["Purple", "Blue", "Indigo"],
        lucky_numbers: &[3, 9, 12],
    },
    ZodiacSign {
        id: SignId::Capricorn,
        name: "Capricorn",
        symbol: "♑",
        element: Element::Earth,
        ruling_planet: "Saturn",
        start: MonthDay::new(12, 22),
        end: MonthDay::new(1, 19),
        dates: "December 22 - January 19",
        traits: &["Responsible", "Disciplined", "Self-controlled", "Ambitious", "Patient"],
        description: "Capricorn is responsible and disciplined, masters of self-control and have the ability to lead, with solid organizational skills.",
        lucky_colors: &["Dark Green", "Brown", "Gray"],
        lucky_numbers: &[1, 4, 8],
    },
    ZodiacSign {
        id: SignId::Aquarius,
        name: "Aquarius",
        symbol: "♒",
        element: Element::Air,
        ruling_planet: "Uranus",
        start: MonthDay::new(1, 20),
        end: MonthDay::new(2, 18),
        dates: "January 20 - February 18",
        traits: &["Progressive", "Original", "Independent", "Humanitarian", "Intellectual"],
        description: "Aquarius is deep, imaginative, and uncompromising in their dedication to making the world a better place.",
        lucky_colors: &["Electric Blue", "Turquoise", "Silver"],
        lucky_numbers: &[2, 5, 7],
    },
    ZodiacSign {
        id: SignId::Pisces,
        name: "Pisces",
        symbol: "♓",
        element: Element::Water,
        ruling_planet: "Neptune",
        start: MonthDay::new(2, 19),
        end: MonthDay::new(3, 20),
        dates: "February 19 - March 20",
        traits: &["Compassionate", "Artistic", "Intuitive", "Gentle", "Musical"],
        description: "Pisces is intuitive, artistic, and deeply feeling. They are the most spiritual of all signs and have a deep connection to the universe.",
        lucky_colors: &["Sea Green", "Lavender", "Aqua"],
        lucky_numbers: &[3, 7, 9],
    },
];

/// Reference record for a sign identifier
#[inline]
pub fn sign(id: SignId) -> &'static ZodiacSign {
    // Table order matches SignId::ALL
    &ZODIAC_SIGNS[id as usize]
}

/// Number of days a month can have in any year (February counts 29)
pub fn days_in_month(month: u32) -> Option<u32> {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => Some(31),
        4 | 6 | 9 | 11 => Some(30),
        2 => Some(29),
        _ => None,
    }
}

/// Map a calendar month/day to its sign
///
/// Rejects months outside 1-12 and days the month cannot have instead of
/// clamping them.
pub fn classify(month: u32, day: u32) -> Result<&'static ZodiacSign, RuleError> {
    let max_day = days_in_month(month).ok_or(RuleError::InvalidMonth(month))?;
    if day == 0 || day > max_day {
        return Err(RuleError::InvalidDay { month, day });
    }

    ZODIAC_SIGNS
        .iter()
        .find(|sign| sign.contains(month, day))
        .ok_or(RuleError::InvalidDay { month, day })
}

/// Classify a calendar date
pub fn classify_date(date: NaiveDate) -> Result<&'static ZodiacSign, RuleError> {
    classify(date.month(), date.day())
}
