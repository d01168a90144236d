mod filters;
mod notes;
