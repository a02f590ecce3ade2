mod common;
mod rubric;
mod sheet;
mod what_if;
