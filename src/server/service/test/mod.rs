mod competition;
mod event;
mod points;
mod registration;
mod time;
