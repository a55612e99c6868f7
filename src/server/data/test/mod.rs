mod event;
mod guild;
mod guild_boss;
mod rsn;
mod run;
mod user;
