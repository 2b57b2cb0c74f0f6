use std::io::{self, Write};

use crate::status::StatusText;

pub const SEPARATOR: &str = "---";

/*
 * Button line with the icon and the dropdown image, then the
 * separator, then the status text as the single menu item
 */
pub fn write_menu<W: Write>(
    out: &mut W,
    icon_name: &str,
    image: &str,
    text: &StatusText,
) -> io::Result<()> {
    writeln!(out, "| iconName=\"{}\" image=\"{}\"", icon_name, image)?;
    writeln!(out, "{}", SEPARATOR)?;

    out.write_all(text.as_bytes())?;
    out.write_all(b"\n")?;

    out.flush()
}
