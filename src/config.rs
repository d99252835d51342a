/// Make.com webhook that receives booking submissions.
pub fn webhook_url() -> &'static str {
    "https://hook.eu2.make.com/y3a1sjyasw2clkxfw33ss4qec92fukig"
}

/// Origin tag carried in every payload so the scenario can tell which
/// site a lead came from.
pub const SOURCE_TAG: &str = "subsisdium-website";
