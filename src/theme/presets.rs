use super::AppTheme;

/// Light - cool paper whites with a blue accent
pub fn light() -> AppTheme {
    AppTheme::from_hex(
        "Light",
        0x00F4_F6F8, // bg_base
        0x00FF_FFFF, // bg_surface
        0x00FF_FFFF, // bg_elevated
        0x00EE_F1F4, // bg_hover - Also used for zebra rows
        0x00DD_E4EC, // bg_active
        0x001F_2328, // fg_primary
        0x0057_606A, // fg_secondary
        0x008C_959F, // fg_muted
        0x00FF_FFFF, // fg_on_accent
        0x0025_63EB, // accent - Blue
        0x001D_4ED8, // accent_hover - Darker blue for contrast
        0x0016_A34A, // success
        0x00D9_7706, // warning
        0x00DC_2626, // danger
        0x0002_84C7, // info
        0x00D0_D7DE, // border
        0x0025_63EB, // border_strong - Accent border for focus
        0x00E5_E7EB, // divider
    )
}

/// Dark - slate backgrounds, same accent family lifted for contrast
pub fn dark() -> AppTheme {
    AppTheme::from_hex(
        "Dark",
        0x0011_1827, // bg_base
        0x001F_2937, // bg_surface
        0x0037_4151, // bg_elevated
        0x0029_3445, // bg_hover
        0x0047_5569, // bg_active
        0x00F3_F4F6, // fg_primary
        0x00D1_D5DB, // fg_secondary
        0x009C_A3AF, // fg_muted
        0x00FF_FFFF, // fg_on_accent
        0x003B_82F6, // accent
        0x0060_A5FA, // accent_hover - Lighter on dark
        0x0022_C55E, // success
        0x00F5_9E0B, // warning
        0x00EF_4444, // danger
        0x0038_BDF8, // info
        0x0037_4151, // border
        0x003B_82F6, // border_strong
        0x0029_3445, // divider
    )
}
