mod laziness;
mod parse_good;
