/// Characters accepted into the city input box.
pub(crate) fn is_city_char(ch: char) -> bool {
    ch.is_alphanumeric() || matches!(ch, ' ' | '-' | '\'' | '’' | ',' | '.')
}
