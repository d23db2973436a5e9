//! CSS named colors.
//!
//! The CSS Color Module Level 4 keyword table plus `transparent`. Lookup is
//! ASCII case-insensitive.

/// A CSS color keyword and the RGBA value it names.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NamedColor {
    /// Lower-case keyword.
    pub name: &'static str,
    /// Red, green, blue.
    pub rgb: [u8; 3],
    /// Opacity in `[0, 1]`.
    pub alpha: f32,
}

const fn named(name: &'static str, r: u8, g: u8, b: u8) -> NamedColor {
    NamedColor {
        name,
        rgb: [r, g, b],
        alpha: 1.0,
    }
}

/// Every keyword known to the parser, in table order.
pub static NAMED_COLORS: &[NamedColor] = &[
    named("black", 0, 0, 0),
    named("silver", 192, 192, 192),
    named("gray", 128, 128, 128),
    named("white", 255, 255, 255),
    named("maroon", 128, 0, 0),
    named("red", 255, 0, 0),
    named("purple", 128, 0, 128),
    named("fuchsia", 255, 0, 255),
    named("green", 0, 128, 0),
    named("lime", 0, 255, 0),
    named("olive", 128, 128, 0),
    named("yellow", 255, 255, 0),
    named("navy", 0, 0, 128),
    named("blue", 0, 0, 255),
    named("teal", 0, 128, 128),
    named("aqua", 0, 255, 255),
    named("aliceblue", 240, 248, 255),
    named("antiquewhite", 250, 235, 215),
    named("aquamarine", 127, 255, 212),
    named("azure", 240, 255, 255),
    named("beige", 245, 245, 220),
    named("bisque", 255, 228, 196),
    named("blanchedalmond", 255, 235, 205),
    named("blueviolet", 138, 43, 226),
    named("brown", 165, 42, 42),
    named("burlywood", 222, 184, 135),
    named("cadetblue", 95, 158, 160),
    named("chartreuse", 127, 255, 0),
    named("chocolate", 210, 105, 30),
    named("coral", 255, 127, 80),
    named("cornflowerblue", 100, 149, 237),
    named("cornsilk", 255, 248, 220),
    named("crimson", 220, 20, 60),
    named("cyan", 0, 255, 255),
    named("darkblue", 0, 0, 139),
    named("darkcyan", 0, 139, 139),
    named("darkgoldenrod", 184, 134, 11),
    named("darkgray", 169, 169, 169),
    named("darkgreen", 0, 100, 0),
    named("darkgrey", 169, 169, 169),
    named("darkkhaki", 189, 183, 107),
    named("darkmagenta", 139, 0, 139),
    named("darkolivegreen", 85, 107, 47),
    named("darkorange", 255, 140, 0),
    named("darkorchid", 153, 50, 204),
    named("darkred", 139, 0, 0),
    named("darksalmon", 233, 150, 122),
    named("darkseagreen", 143, 188, 143),
    named("darkslateblue", 72, 61, 139),
    named("darkslategray", 47, 79, 79),
    named("darkslategrey", 47, 79, 79),
    named("darkturquoise", 0, 206, 209),
    named("darkviolet", 148, 0, 211),
    named("deeppink", 255, 20, 147),
    named("deepskyblue", 0, 191, 255),
    named("dimgray", 105, 105, 105),
    named("dimgrey", 105, 105, 105),
    named("dodgerblue", 30, 144, 255),
    named("firebrick", 178, 34, 34),
    named("floralwhite", 255, 250, 240),
    named("forestgreen", 34, 139, 34),
    named("gainsboro", 220, 220, 220),
    named("ghostwhite", 248, 248, 255),
    named("gold", 255, 215, 0),
    named("goldenrod", 218, 165, 32),
    named("greenyellow", 173, 255, 47),
    named("grey", 128, 128, 128),
    named("honeydew", 240, 255, 240),
    named("hotpink", 255, 105, 180),
    named("indianred", 205, 92, 92),
    named("indigo", 75, 0, 130),
    named("ivory", 255, 255, 240),
    named("khaki", 240, 230, 140),
    named("lavender", 230, 230, 250),
    named("lavenderblush", 255, 240, 245),
    named("lawngreen", 124, 252, 0),
    named("lemonchiffon", 255, 250, 205),
    named("lightblue", 173, 216, 230),
    named("lightcoral", 240, 128, 128),
    named("lightcyan", 224, 255, 255),
    named("lightgoldenrodyellow", 250, 250, 210),
    named("lightgray", 211, 211, 211),
    named("lightgreen", 144, 238, 144),
    named("lightgrey", 211, 211, 211),
    named("lightpink", 255, 182, 193),
    named("lightsalmon", 255, 160, 122),
    named("lightseagreen", 32, 178, 170),
    named("lightskyblue", 135, 206, 250),
    named("lightslategray", 119, 136, 153),
    named("lightslategrey", 119, 136, 153),
    named("lightsteelblue", 176, 196, 222),
    named("lightyellow", 255, 255, 224),
    named("limegreen", 50, 205, 50),
    named("linen", 250, 240, 230),
    named("magenta", 255, 0, 255),
    named("mediumaquamarine", 102, 205, 170),
    named("mediumblue", 0, 0, 205),
    named("mediumorchid", 186, 85, 211),
    named("mediumpurple", 147, 112, 219),
    named("mediumseagreen", 60, 179, 113),
    named("mediumslateblue", 123, 104, 238),
    named("mediumspringgreen", 0, 250, 154),
    named("mediumturquoise", 72, 209, 204),
    named("mediumvioletred", 199, 21, 133),
    named("midnightblue", 25, 25, 112),
    named("mintcream", 245, 255, 250),
    named("mistyrose", 255, 228, 225),
    named("moccasin", 255, 228, 181),
    named("navajowhite", 255, 222, 173),
    named("oldlace", 253, 245, 230),
    named("olivedrab", 107, 142, 35),
    named("orange", 255, 165, 0),
    named("orangered", 255, 69, 0),
    named("orchid", 218, 112, 214),
    named("palegoldenrod", 238, 232, 170),
    named("palegreen", 152, 251, 152),
    named("paleturquoise", 175, 238, 238),
    named("palevioletred", 219, 112, 147),
    named("papayawhip", 255, 239, 213),
    named("peachpuff", 255, 218, 185),
    named("peru", 205, 133, 63),
    named("pink", 255, 192, 203),
    named("plum", 221, 160, 221),
    named("powderblue", 176, 224, 230),
    named("rebeccapurple", 102, 51, 153),
    named("rosybrown", 188, 143, 143),
    named("royalblue", 65, 105, 225),
    named("saddlebrown", 139, 69, 19),
    named("salmon", 250, 128, 114),
    named("sandybrown", 244, 164, 96),
    named("seagreen", 46, 139, 87),
    named("seashell", 255, 245, 238),
    named("sienna", 160, 82, 45),
    named("skyblue", 135, 206, 235),
    named("slateblue", 106, 90, 205),
    named("slategray", 112, 128, 144),
    named("slategrey", 112, 128, 144),
    named("snow", 255, 250, 250),
    named("springgreen", 0, 255, 127),
    named("steelblue", 70, 130, 180),
    named("tan", 210, 180, 140),
    named("thistle", 216, 191, 216),
    named("tomato", 255, 99, 71),
    named("turquoise", 64, 224, 208),
    named("violet", 238, 130, 238),
    named("wheat", 245, 222, 179),
    named("whitesmoke", 245, 245, 245),
    named("yellowgreen", 154, 205, 50),
    NamedColor {
        name: "transparent",
        rgb: [0, 0, 0],
        alpha: 0.0,
    },
];

/// Looks up a CSS color keyword.
pub fn lookup(keyword: &str) -> Option<&'static NamedColor> {
    let keyword = keyword.trim();
    NAMED_COLORS
        .iter()
        .find(|entry| entry.name.eq_ignore_ascii_case(keyword))
}

