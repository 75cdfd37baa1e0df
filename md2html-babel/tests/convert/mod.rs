mod document;
mod inline;
mod properties;
