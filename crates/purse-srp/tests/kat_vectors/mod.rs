mod digests;
mod rfc5054;
