mod codec;
mod property;
