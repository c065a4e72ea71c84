//! Advance widths of the PDF standard fonts, taken from the Adobe AFM files.
//!
//! Widths are in thousandths of an em. `ASCII` tables cover 0x20..=0x7E;
//! index = (char as usize) - 32. Characters outside ASCII that Italian offers
//! actually use are listed separately.

pub(crate) static HELVETICA: [u16; 95] = [
    // sp    !    "    #    $    %    &    '    (    )    *    +    ,    -    .    /
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    // 0-9
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
    // :    ;    <    =    >    ?    @
    278, 278, 584, 584, 584, 556, 1015,
    // A-Z
    667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778, 667, 778, 722,
    667, 611, 722, 667, 944, 667, 667, 611,
    // [    \    ]    ^    _    `
    278, 278, 278, 469, 556, 333,
    // a-z
    556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556, 556, 556, 333,
    500, 278, 556, 500, 722, 500, 500, 500,
    // {    |    }    ~
    334, 260, 334, 584,
];

pub(crate) static HELVETICA_BOLD: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
    333, 333, 584, 584, 584, 611, 975,
    722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778, 667, 778, 722,
    667, 611, 722, 667, 944, 667, 667, 611,
    333, 278, 333, 584, 556, 333,
    556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611, 611, 611, 389,
    556, 333, 611, 556, 778, 556, 556, 500,
    389, 280, 389, 584,
];

pub(crate) static COURIER: [u16; 95] = [600; 95];

pub(crate) const HELVETICA_EXTRA: &[(char, u16)] = &[
    ('€', 556),
    ('à', 556),
    ('è', 556),
    ('é', 556),
    ('ì', 278),
    ('ò', 556),
    ('ù', 556),
    ('À', 667),
    ('È', 667),
    ('É', 667),
    ('Ì', 278),
    ('Ò', 778),
    ('Ù', 722),
    ('°', 400),
    ('‘', 222),
    ('’', 222),
    ('“', 333),
    ('”', 333),
    ('–', 556),
    ('•', 350),
];

pub(crate) const HELVETICA_BOLD_EXTRA: &[(char, u16)] = &[
    ('€', 556),
    ('à', 556),
    ('è', 556),
    ('é', 556),
    ('ì', 278),
    ('ò', 611),
    ('ù', 611),
    ('À', 722),
    ('È', 667),
    ('É', 667),
    ('Ì', 278),
    ('Ò', 778),
    ('Ù', 722),
    ('°', 400),
    ('‘', 278),
    ('’', 278),
    ('“', 500),
    ('”', 500),
    ('–', 556),
    ('•', 350),
];
