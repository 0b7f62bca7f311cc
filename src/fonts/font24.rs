#[rustfmt::skip]
pub(crate) const TABLE: [u8; 6840] = [
    // @0 ' ' (17 pixels wide)
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    // @72 '!' (17 pixels wide)
    0x01, 0xC0, 0x00, //        ###
    0x01, 0xC0, 0x00, //        ###
    0x01, 0xC0, 0x00, //        ###
    0x01, 0xC0, 0x00, //        ###
    0x01, 0xC0, 0x00, //        ###
    0x01, 0xC0, 0x00, //        ###
    0x01, 0xC0, 0x00, //        ###
    0x01, 0xC0, 0x00, //        ###
    0x01, 0xC0, 0x00, //        ###
    0x01, 0xC0, 0x00, //        ###
    0x01, 0xC0, 0x00, //        ###
    0x01, 0xC0, 0x00, //        ###
    0x01, 0xC0, 0x00, //        ###
    0x01, 0xC0, 0x00, //        ###
    0x01, 0xC0, 0x00, //        ###
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x01, 0xC0, 0x00, //        ###
    0x01, 0xC0, 0x00, //        ###
    0x01, 0xC0, 0x00, //        ###
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    // @144 '"' (17 pixels wide)
    0x0E, 0x38, 0x00, //     ###   ###
    0x0E, 0x38, 0x00, //     ###   ###
    0x0E, 0x38, 0x00, //     ###   ###
    0x0E, 0x38, 0x00, //     ###   ###
    0x0E, 0x38, 0x00, //     ###   ###
    0x0E, 0x38, 0x00, //     ###   ###
    0x0E, 0x38, 0x00, //     ###   ###
    0x0E, 0x38, 0x00, //     ###   ###
    0x0E, 0x38, 0x00, //     ###   ###
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    // @216 '#' (17 pixels wide)
    0x0E, 0x38, 0x00, //     ###   ###
    0x0E, 0x38, 0x00, //     ###   ###
    0x0E, 0x38, 0x00, //     ###   ###
    0x0E, 0x38, 0x00, //     ###   ###
    0x0E, 0x38, 0x00, //     ###   ###
    0x0E, 0x38, 0x00, //     ###   ###
    0x7F, 0xFF, 0x00, //  ###############
    0x7F, 0xFF, 0x00, //  ###############
    0x7F, 0xFF, 0x00, //  ###############
    0x0E, 0x38, 0x00, //     ###   ###
    0x0E, 0x38, 0x00, //     ###   ###
    0x0E, 0x38, 0x00, //     ###   ###
    0x7F, 0xFF, 0x00, //  ###############
    0x7F, 0xFF, 0x00, //  ###############
    0x7F, 0xFF, 0x00, //  ###############
    0x0E, 0x38, 0x00, //     ###   ###
    0x0E, 0x38, 0x00, //     ###   ###
    0x0E, 0x38, 0x00, //     ###   ###
    0x0E, 0x38, 0x00, //     ###   ###
    0x0E, 0x38, 0x00, //     ###   ###
    0x0E, 0x38, 0x00, //     ###   ###
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    // @288 '$' (17 pixels wide)
    0x01, 0xC0, 0x00, //        ###
    0x01, 0xC0, 0x00, //        ###
    0x01, 0xC0, 0x00, //        ###
    0x0F, 0xFF, 0x00, //     ############
    0x0F, 0xFF, 0x00, //     ############
    0x0F, 0xFF, 0x00, //     ############
    0x71, 0xC0, 0x00, //  ###   ###
    0x71, 0xC0, 0x00, //  ###   ###
    0x71, 0xC0, 0x00, //  ###   ###
    0x0F, 0xF8, 0x00, //     #########
    0x0F, 0xF8, 0x00, //     #########
    0x0F, 0xF8, 0x00, //     #########
    0x01, 0xC7, 0x00, //        ###   ###
    0x01, 0xC7, 0x00, //        ###   ###
    0x01, 0xC7, 0x00, //        ###   ###
    0x7F, 0xF8, 0x00, //  ############
    0x7F, 0xF8, 0x00, //  ############
    0x7F, 0xF8, 0x00, //  ############
    0x01, 0xC0, 0x00, //        ###
    0x01, 0xC0, 0x00, //        ###
    0x01, 0xC0, 0x00, //        ###
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    // @360 '%' (17 pixels wide)
    0x7E, 0x00, 0x00, //  ######
    0x7E, 0x00, 0x00, //  ######
    0x7E, 0x00, 0x00, //  ######
    0x7E, 0x07, 0x00, //  ######      ###
    0x7E, 0x07, 0x00, //  ######      ###
    0x7E, 0x07, 0x00, //  ######      ###
    0x00, 0x38, 0x00, //           ###
    0x00, 0x38, 0x00, //           ###
    0x00, 0x38, 0x00, //           ###
    0x01, 0xC0, 0x00, //        ###
    0x01, 0xC0, 0x00, //        ###
    0x01, 0xC0, 0x00, //        ###
    0x0E, 0x00, 0x00, //     ###
    0x0E, 0x00, 0x00, //     ###
    0x0E, 0x00, 0x00, //     ###
    0x70, 0x3F, 0x00, //  ###      ######
    0x70, 0x3F, 0x00, //  ###      ######
    0x70, 0x3F, 0x00, //  ###      ######
    0x00, 0x3F, 0x00, //           ######
    0x00, 0x3F, 0x00, //           ######
    0x00, 0x3F, 0x00, //           ######
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    // @432 '&' (17 pixels wide)
    0x0E, 0x00, 0x00, //     ###
    0x0E, 0x00, 0x00, //     ###
    0x0E, 0x00, 0x00, //     ###
    0x71, 0xC0, 0x00, //  ###   ###
    0x71, 0xC0, 0x00, //  ###   ###
    0x71, 0xC0, 0x00, //  ###   ###
    0x71, 0xC0, 0x00, //  ###   ###
    0x71, 0xC0, 0x00, //  ###   ###
    0x71, 0xC0, 0x00, //  ###   ###
    0x0E, 0x00, 0x00, //     ###
    0x0E, 0x00, 0x00, //     ###
    0x0E, 0x00, 0x00, //     ###
    0x71, 0xC7, 0x00, //  ###   ###   ###
    0x71, 0xC7, 0x00, //  ###   ###   ###
    0x71, 0xC7, 0x00, //  ###   ###   ###
    0x70, 0x38, 0x00, //  ###      ###
    0x70, 0x38, 0x00, //  ###      ###
    0x70, 0x38, 0x00, //  ###      ###
    0x0F, 0xC7, 0x00, //     ######   ###
    0x0F, 0xC7, 0x00, //     ######   ###
    0x0F, 0xC7, 0x00, //     ######   ###
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    // @504 '\'' (17 pixels wide)
    0x01, 0xF8, 0x00, //        ######
    0x01, 0xF8, 0x00, //        ######
    0x01, 0xF8, 0x00, //        ######
    0x01, 0xF8, 0x00, //        ######
    0x01, 0xF8, 0x00, //        ######
    0x01, 0xF8, 0x00, //        ######
    0x01, 0xC0, 0x00, //        ###
    0x01, 0xC0, 0x00, //        ###
    0x01, 0xC0, 0x00, //        ###
    0x0E, 0x00, 0x00, //     ###
    0x0E, 0x00, 0x00, //     ###
    0x0E, 0x00, 0x00, //     ###
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    // @576 '(' (17 pixels wide)
    0x00, 0x38, 0x00, //           ###
    0x00, 0x38, 0x00, //           ###
    0x00, 0x38, 0x00, //           ###
    0x01, 0xC0, 0x00, //        ###
    0x01, 0xC0, 0x00, //        ###
    0x01, 0xC0, 0x00, //        ###
    0x0E, 0x00, 0x00, //     ###
    0x0E, 0x00, 0x00, //     ###
    0x0E, 0x00, 0x00, //     ###
    0x0E, 0x00, 0x00, //     ###
    0x0E, 0x00, 0x00, //     ###
    0x0E, 0x00, 0x00, //     ###
    0x0E, 0x00, 0x00, //     ###
    0x0E, 0x00, 0x00, //     ###
    0x0E, 0x00, 0x00, //     ###
    0x01, 0xC0, 0x00, //        ###
    0x01, 0xC0, 0x00, //        ###
    0x01, 0xC0, 0x00, //        ###
    0x00, 0x38, 0x00, //           ###
    0x00, 0x38, 0x00, //           ###
    0x00, 0x38, 0x00, //           ###
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    // @648 ')' (17 pixels wide)
    0x0E, 0x00, 0x00, //     ###
    0x0E, 0x00, 0x00, //     ###
    0x0E, 0x00, 0x00, //     ###
    0x01, 0xC0, 0x00, //        ###
    0x01, 0xC0, 0x00, //        ###
    0x01, 0xC0, 0x00, //        ###
    0x00, 0x38, 0x00, //           ###
    0x00, 0x38, 0x00, //           ###
    0x00, 0x38, 0x00, //           ###
    0x00, 0x38, 0x00, //           ###
    0x00, 0x38, 0x00, //           ###
    0x00, 0x38, 0x00, //           ###
    0x00, 0x38, 0x00, //           ###
    0x00, 0x38, 0x00, //           ###
    0x00, 0x38, 0x00, //           ###
    0x01, 0xC0, 0x00, //        ###
    0x01, 0xC0, 0x00, //        ###
    0x01, 0xC0, 0x00, //        ###
    0x0E, 0x00, 0x00, //     ###
    0x0E, 0x00, 0x00, //     ###
    0x0E, 0x00, 0x00, //     ###
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    // @720 '*' (17 pixels wide)
    0x01, 0xC0, 0x00, //        ###
    0x01, 0xC0, 0x00, //        ###
    0x01, 0xC0, 0x00, //        ###
    0x71, 0xC7, 0x00, //  ###   ###   ###
    0x71, 0xC7, 0x00, //  ###   ###   ###
    0x71, 0xC7, 0x00, //  ###   ###   ###
    0x0F, 0xF8, 0x00, //     #########
    0x0F, 0xF8, 0x00, //     #########
    0x0F, 0xF8, 0x00, //     #########
    0x7F, 0xFF, 0x00, //  ###############
    0x7F, 0xFF, 0x00, //  ###############
    0x7F, 0xFF, 0x00, //  ###############
    0x0F, 0xF8, 0x00, //     #########
    0x0F, 0xF8, 0x00, //     #########
    0x0F, 0xF8, 0x00, //     #########
    0x71, 0xC7, 0x00, //  ###   ###   ###
    0x71, 0xC7, 0x00, //  ###   ###   ###
    0x71, 0xC7, 0x00, //  ###   ###   ###
    0x01, 0xC0, 0x00, //        ###
    0x01, 0xC0, 0x00, //        ###
    0x01, 0xC0, 0x00, //        ###
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    // @792 '+' (17 pixels wide)
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x01, 0xC0, 0x00, //        ###
    0x01, 0xC0, 0x00, //        ###
    0x01, 0xC0, 0x00, //        ###
    0x01, 0xC0, 0x00, //        ###
    0x01, 0xC0, 0x00, //        ###
    0x01, 0xC0, 0x00, //        ###
    0x7F, 0xFF, 0x00, //  ###############
    0x7F, 0xFF, 0x00, //  ###############
    0x7F, 0xFF, 0x00, //  ###############
    0x01, 0xC0, 0x00, //        ###
    0x01, 0xC0, 0x00, //        ###
    0x01, 0xC0, 0x00, //        ###
    0x01, 0xC0, 0x00, //        ###
    0x01, 0xC0, 0x00, //        ###
    0x01, 0xC0, 0x00, //        ###
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    // @864 ',' (17 pixels wide)
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x01, 0xF8, 0x00, //        ######
    0x01, 0xF8, 0x00, //        ######
    0x01, 0xF8, 0x00, //        ######
    0x01, 0xF8, 0x00, //        ######
    0x01, 0xF8, 0x00, //        ######
    0x01, 0xF8, 0x00, //        ######
    0x01, 0xC0, 0x00, //        ###
    0x01, 0xC0, 0x00, //        ###
    0x01, 0xC0, 0x00, //        ###
    0x0E, 0x00, 0x00, //     ###
    0x0E, 0x00, 0x00, //     ###
    0x0E, 0x00, 0x00, //     ###
    // @936 '-' (17 pixels wide)
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x7F, 0xFF, 0x00, //  ###############
    0x7F, 0xFF, 0x00, //  ###############
    0x7F, 0xFF, 0x00, //  ###############
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    // @1008 '.' (17 pixels wide)
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x01, 0xF8, 0x00, //        ######
    0x01, 0xF8, 0x00, //        ######
    0x01, 0xF8, 0x00, //        ######
    0x01, 0xF8, 0x00, //        ######
    0x01, 0xF8, 0x00, //        ######
    0x01, 0xF8, 0x00, //        ######
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    // @1080 '/' (17 pixels wide)
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x07, 0x00, //              ###
    0x00, 0x07, 0x00, //              ###
    0x00, 0x07, 0x00, //              ###
    0x00, 0x38, 0x00, //           ###
    0x00, 0x38, 0x00, //           ###
    0x00, 0x38, 0x00, //           ###
    0x01, 0xC0, 0x00, //        ###
    0x01, 0xC0, 0x00, //        ###
    0x01, 0xC0, 0x00, //        ###
    0x0E, 0x00, 0x00, //     ###
    0x0E, 0x00, 0x00, //     ###
    0x0E, 0x00, 0x00, //     ###
    0x70, 0x00, 0x00, //  ###
    0x70, 0x00, 0x00, //  ###
    0x70, 0x00, 0x00, //  ###
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    // @1152 '0' (17 pixels wide)
    0x0F, 0xF8, 0x00, //     #########
    0x0F, 0xF8, 0x00, //     #########
    0x0F, 0xF8, 0x00, //     #########
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x3F, 0x00, //  ###      ######
    0x70, 0x3F, 0x00, //  ###      ######
    0x70, 0x3F, 0x00, //  ###      ######
    0x71, 0xC7, 0x00, //  ###   ###   ###
    0x71, 0xC7, 0x00, //  ###   ###   ###
    0x71, 0xC7, 0x00, //  ###   ###   ###
    0x7E, 0x07, 0x00, //  ######      ###
    0x7E, 0x07, 0x00, //  ######      ###
    0x7E, 0x07, 0x00, //  ######      ###
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x0F, 0xF8, 0x00, //     #########
    0x0F, 0xF8, 0x00, //     #########
    0x0F, 0xF8, 0x00, //     #########
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    // @1224 '1' (17 pixels wide)
    0x01, 0xC0, 0x00, //        ###
    0x01, 0xC0, 0x00, //        ###
    0x01, 0xC0, 0x00, //        ###
    0x0F, 0xC0, 0x00, //     ######
    0x0F, 0xC0, 0x00, //     ######
    0x0F, 0xC0, 0x00, //     ######
    0x01, 0xC0, 0x00, //        ###
    0x01, 0xC0, 0x00, //        ###
    0x01, 0xC0, 0x00, //        ###
    0x01, 0xC0, 0x00, //        ###
    0x01, 0xC0, 0x00, //        ###
    0x01, 0xC0, 0x00, //        ###
    0x01, 0xC0, 0x00, //        ###
    0x01, 0xC0, 0x00, //        ###
    0x01, 0xC0, 0x00, //        ###
    0x01, 0xC0, 0x00, //        ###
    0x01, 0xC0, 0x00, //        ###
    0x01, 0xC0, 0x00, //        ###
    0x0F, 0xF8, 0x00, //     #########
    0x0F, 0xF8, 0x00, //     #########
    0x0F, 0xF8, 0x00, //     #########
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    // @1296 '2' (17 pixels wide)
    0x0F, 0xF8, 0x00, //     #########
    0x0F, 0xF8, 0x00, //     #########
    0x0F, 0xF8, 0x00, //     #########
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x00, 0x07, 0x00, //              ###
    0x00, 0x07, 0x00, //              ###
    0x00, 0x07, 0x00, //              ###
    0x0F, 0xF8, 0x00, //     #########
    0x0F, 0xF8, 0x00, //     #########
    0x0F, 0xF8, 0x00, //     #########
    0x70, 0x00, 0x00, //  ###
    0x70, 0x00, 0x00, //  ###
    0x70, 0x00, 0x00, //  ###
    0x70, 0x00, 0x00, //  ###
    0x70, 0x00, 0x00, //  ###
    0x70, 0x00, 0x00, //  ###
    0x7F, 0xFF, 0x00, //  ###############
    0x7F, 0xFF, 0x00, //  ###############
    0x7F, 0xFF, 0x00, //  ###############
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    // @1368 '3' (17 pixels wide)
    0x7F, 0xFF, 0x00, //  ###############
    0x7F, 0xFF, 0x00, //  ###############
    0x7F, 0xFF, 0x00, //  ###############
    0x00, 0x07, 0x00, //              ###
    0x00, 0x07, 0x00, //              ###
    0x00, 0x07, 0x00, //              ###
    0x00, 0x38, 0x00, //           ###
    0x00, 0x38, 0x00, //           ###
    0x00, 0x38, 0x00, //           ###
    0x01, 0xF8, 0x00, //        ######
    0x01, 0xF8, 0x00, //        ######
    0x01, 0xF8, 0x00, //        ######
    0x00, 0x07, 0x00, //              ###
    0x00, 0x07, 0x00, //              ###
    0x00, 0x07, 0x00, //              ###
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x0F, 0xF8, 0x00, //     #########
    0x0F, 0xF8, 0x00, //     #########
    0x0F, 0xF8, 0x00, //     #########
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    // @1440 '4' (17 pixels wide)
    0x00, 0x38, 0x00, //           ###
    0x00, 0x38, 0x00, //           ###
    0x00, 0x38, 0x00, //           ###
    0x01, 0xF8, 0x00, //        ######
    0x01, 0xF8, 0x00, //        ######
    0x01, 0xF8, 0x00, //        ######
    0x0E, 0x38, 0x00, //     ###   ###
    0x0E, 0x38, 0x00, //     ###   ###
    0x0E, 0x38, 0x00, //     ###   ###
    0x70, 0x38, 0x00, //  ###      ###
    0x70, 0x38, 0x00, //  ###      ###
    0x70, 0x38, 0x00, //  ###      ###
    0x7F, 0xFF, 0x00, //  ###############
    0x7F, 0xFF, 0x00, //  ###############
    0x7F, 0xFF, 0x00, //  ###############
    0x00, 0x38, 0x00, //           ###
    0x00, 0x38, 0x00, //           ###
    0x00, 0x38, 0x00, //           ###
    0x00, 0x38, 0x00, //           ###
    0x00, 0x38, 0x00, //           ###
    0x00, 0x38, 0x00, //           ###
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    // @1512 '5' (17 pixels wide)
    0x7F, 0xFF, 0x00, //  ###############
    0x7F, 0xFF, 0x00, //  ###############
    0x7F, 0xFF, 0x00, //  ###############
    0x70, 0x00, 0x00, //  ###
    0x70, 0x00, 0x00, //  ###
    0x70, 0x00, 0x00, //  ###
    0x7F, 0xF8, 0x00, //  ############
    0x7F, 0xF8, 0x00, //  ############
    0x7F, 0xF8, 0x00, //  ############
    0x00, 0x07, 0x00, //              ###
    0x00, 0x07, 0x00, //              ###
    0x00, 0x07, 0x00, //              ###
    0x00, 0x07, 0x00, //              ###
    0x00, 0x07, 0x00, //              ###
    0x00, 0x07, 0x00, //              ###
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x0F, 0xF8, 0x00, //     #########
    0x0F, 0xF8, 0x00, //     #########
    0x0F, 0xF8, 0x00, //     #########
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    // @1584 '6' (17 pixels wide)
    0x01, 0xFF, 0x00, //        #########
    0x01, 0xFF, 0x00, //        #########
    0x01, 0xFF, 0x00, //        #########
    0x0E, 0x00, 0x00, //     ###
    0x0E, 0x00, 0x00, //     ###
    0x0E, 0x00, 0x00, //     ###
    0x70, 0x00, 0x00, //  ###
    0x70, 0x00, 0x00, //  ###
    0x70, 0x00, 0x00, //  ###
    0x7F, 0xF8, 0x00, //  ############
    0x7F, 0xF8, 0x00, //  ############
    0x7F, 0xF8, 0x00, //  ############
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x0F, 0xF8, 0x00, //     #########
    0x0F, 0xF8, 0x00, //     #########
    0x0F, 0xF8, 0x00, //     #########
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    // @1656 '7' (17 pixels wide)
    0x7F, 0xFF, 0x00, //  ###############
    0x7F, 0xFF, 0x00, //  ###############
    0x7F, 0xFF, 0x00, //  ###############
    0x00, 0x07, 0x00, //              ###
    0x00, 0x07, 0x00, //              ###
    0x00, 0x07, 0x00, //              ###
    0x00, 0x07, 0x00, //              ###
    0x00, 0x07, 0x00, //              ###
    0x00, 0x07, 0x00, //              ###
    0x00, 0x38, 0x00, //           ###
    0x00, 0x38, 0x00, //           ###
    0x00, 0x38, 0x00, //           ###
    0x01, 0xC0, 0x00, //        ###
    0x01, 0xC0, 0x00, //        ###
    0x01, 0xC0, 0x00, //        ###
    0x0E, 0x00, 0x00, //     ###
    0x0E, 0x00, 0x00, //     ###
    0x0E, 0x00, 0x00, //     ###
    0x70, 0x00, 0x00, //  ###
    0x70, 0x00, 0x00, //  ###
    0x70, 0x00, 0x00, //  ###
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    // @1728 '8' (17 pixels wide)
    0x0F, 0xF8, 0x00, //     #########
    0x0F, 0xF8, 0x00, //     #########
    0x0F, 0xF8, 0x00, //     #########
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x0F, 0xF8, 0x00, //     #########
    0x0F, 0xF8, 0x00, //     #########
    0x0F, 0xF8, 0x00, //     #########
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x0F, 0xF8, 0x00, //     #########
    0x0F, 0xF8, 0x00, //     #########
    0x0F, 0xF8, 0x00, //     #########
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    // @1800 '9' (17 pixels wide)
    0x0F, 0xF8, 0x00, //     #########
    0x0F, 0xF8, 0x00, //     #########
    0x0F, 0xF8, 0x00, //     #########
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x0F, 0xFF, 0x00, //     ############
    0x0F, 0xFF, 0x00, //     ############
    0x0F, 0xFF, 0x00, //     ############
    0x00, 0x07, 0x00, //              ###
    0x00, 0x07, 0x00, //              ###
    0x00, 0x07, 0x00, //              ###
    0x00, 0x38, 0x00, //           ###
    0x00, 0x38, 0x00, //           ###
    0x00, 0x38, 0x00, //           ###
    0x7F, 0xC0, 0x00, //  #########
    0x7F, 0xC0, 0x00, //  #########
    0x7F, 0xC0, 0x00, //  #########
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    // @1872 ':' (17 pixels wide)
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x01, 0xC0, 0x00, //        ###
    0x01, 0xC0, 0x00, //        ###
    0x01, 0xC0, 0x00, //        ###
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x01, 0xC0, 0x00, //        ###
    0x01, 0xC0, 0x00, //        ###
    0x01, 0xC0, 0x00, //        ###
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    // @1944 ';' (17 pixels wide)
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x01, 0xC0, 0x00, //        ###
    0x01, 0xC0, 0x00, //        ###
    0x01, 0xC0, 0x00, //        ###
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x01, 0xC0, 0x00, //        ###
    0x01, 0xC0, 0x00, //        ###
    0x01, 0xC0, 0x00, //        ###
    0x01, 0xC0, 0x00, //        ###
    0x01, 0xC0, 0x00, //        ###
    0x01, 0xC0, 0x00, //        ###
    0x0E, 0x00, 0x00, //     ###
    0x0E, 0x00, 0x00, //     ###
    0x0E, 0x00, 0x00, //     ###
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    // @2016 '<' (17 pixels wide)
    0x00, 0x07, 0x00, //              ###
    0x00, 0x07, 0x00, //              ###
    0x00, 0x07, 0x00, //              ###
    0x00, 0x38, 0x00, //           ###
    0x00, 0x38, 0x00, //           ###
    0x00, 0x38, 0x00, //           ###
    0x01, 0xC0, 0x00, //        ###
    0x01, 0xC0, 0x00, //        ###
    0x01, 0xC0, 0x00, //        ###
    0x0E, 0x00, 0x00, //     ###
    0x0E, 0x00, 0x00, //     ###
    0x0E, 0x00, 0x00, //     ###
    0x01, 0xC0, 0x00, //        ###
    0x01, 0xC0, 0x00, //        ###
    0x01, 0xC0, 0x00, //        ###
    0x00, 0x38, 0x00, //           ###
    0x00, 0x38, 0x00, //           ###
    0x00, 0x38, 0x00, //           ###
    0x00, 0x07, 0x00, //              ###
    0x00, 0x07, 0x00, //              ###
    0x00, 0x07, 0x00, //              ###
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    // @2088 '=' (17 pixels wide)
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x7F, 0xFF, 0x00, //  ###############
    0x7F, 0xFF, 0x00, //  ###############
    0x7F, 0xFF, 0x00, //  ###############
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x7F, 0xFF, 0x00, //  ###############
    0x7F, 0xFF, 0x00, //  ###############
    0x7F, 0xFF, 0x00, //  ###############
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    // @2160 '>' (17 pixels wide)
    0x0E, 0x00, 0x00, //     ###
    0x0E, 0x00, 0x00, //     ###
    0x0E, 0x00, 0x00, //     ###
    0x01, 0xC0, 0x00, //        ###
    0x01, 0xC0, 0x00, //        ###
    0x01, 0xC0, 0x00, //        ###
    0x00, 0x38, 0x00, //           ###
    0x00, 0x38, 0x00, //           ###
    0x00, 0x38, 0x00, //           ###
    0x00, 0x07, 0x00, //              ###
    0x00, 0x07, 0x00, //              ###
    0x00, 0x07, 0x00, //              ###
    0x00, 0x38, 0x00, //           ###
    0x00, 0x38, 0x00, //           ###
    0x00, 0x38, 0x00, //           ###
    0x01, 0xC0, 0x00, //        ###
    0x01, 0xC0, 0x00, //        ###
    0x01, 0xC0, 0x00, //        ###
    0x0E, 0x00, 0x00, //     ###
    0x0E, 0x00, 0x00, //     ###
    0x0E, 0x00, 0x00, //     ###
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    // @2232 '?' (17 pixels wide)
    0x0F, 0xF8, 0x00, //     #########
    0x0F, 0xF8, 0x00, //     #########
    0x0F, 0xF8, 0x00, //     #########
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x00, 0x07, 0x00, //              ###
    0x00, 0x07, 0x00, //              ###
    0x00, 0x07, 0x00, //              ###
    0x01, 0xF8, 0x00, //        ######
    0x01, 0xF8, 0x00, //        ######
    0x01, 0xF8, 0x00, //        ######
    0x01, 0xC0, 0x00, //        ###
    0x01, 0xC0, 0x00, //        ###
    0x01, 0xC0, 0x00, //        ###
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x01, 0xC0, 0x00, //        ###
    0x01, 0xC0, 0x00, //        ###
    0x01, 0xC0, 0x00, //        ###
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    // @2304 '@' (17 pixels wide)
    0x0F, 0xF8, 0x00, //     #########
    0x0F, 0xF8, 0x00, //     #########
    0x0F, 0xF8, 0x00, //     #########
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x71, 0xC7, 0x00, //  ###   ###   ###
    0x71, 0xC7, 0x00, //  ###   ###   ###
    0x71, 0xC7, 0x00, //  ###   ###   ###
    0x71, 0xFF, 0x00, //  ###   #########
    0x71, 0xFF, 0x00, //  ###   #########
    0x71, 0xFF, 0x00, //  ###   #########
    0x71, 0xF8, 0x00, //  ###   ######
    0x71, 0xF8, 0x00, //  ###   ######
    0x71, 0xF8, 0x00, //  ###   ######
    0x70, 0x00, 0x00, //  ###
    0x70, 0x00, 0x00, //  ###
    0x70, 0x00, 0x00, //  ###
    0x0F, 0xFF, 0x00, //     ############
    0x0F, 0xFF, 0x00, //     ############
    0x0F, 0xFF, 0x00, //     ############
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    // @2376 'A' (17 pixels wide)
    0x01, 0xC0, 0x00, //        ###
    0x01, 0xC0, 0x00, //        ###
    0x01, 0xC0, 0x00, //        ###
    0x0E, 0x38, 0x00, //     ###   ###
    0x0E, 0x38, 0x00, //     ###   ###
    0x0E, 0x38, 0x00, //     ###   ###
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x7F, 0xFF, 0x00, //  ###############
    0x7F, 0xFF, 0x00, //  ###############
    0x7F, 0xFF, 0x00, //  ###############
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    // @2448 'B' (17 pixels wide)
    0x7F, 0xF8, 0x00, //  ############
    0x7F, 0xF8, 0x00, //  ############
    0x7F, 0xF8, 0x00, //  ############
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x7F, 0xF8, 0x00, //  ############
    0x7F, 0xF8, 0x00, //  ############
    0x7F, 0xF8, 0x00, //  ############
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x7F, 0xF8, 0x00, //  ############
    0x7F, 0xF8, 0x00, //  ############
    0x7F, 0xF8, 0x00, //  ############
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    // @2520 'C' (17 pixels wide)
    0x0F, 0xF8, 0x00, //     #########
    0x0F, 0xF8, 0x00, //     #########
    0x0F, 0xF8, 0x00, //     #########
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x00, 0x00, //  ###
    0x70, 0x00, 0x00, //  ###
    0x70, 0x00, 0x00, //  ###
    0x70, 0x00, 0x00, //  ###
    0x70, 0x00, 0x00, //  ###
    0x70, 0x00, 0x00, //  ###
    0x70, 0x00, 0x00, //  ###
    0x70, 0x00, 0x00, //  ###
    0x70, 0x00, 0x00, //  ###
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x0F, 0xF8, 0x00, //     #########
    0x0F, 0xF8, 0x00, //     #########
    0x0F, 0xF8, 0x00, //     #########
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    // @2592 'D' (17 pixels wide)
    0x7F, 0xF8, 0x00, //  ############
    0x7F, 0xF8, 0x00, //  ############
    0x7F, 0xF8, 0x00, //  ############
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x7F, 0xF8, 0x00, //  ############
    0x7F, 0xF8, 0x00, //  ############
    0x7F, 0xF8, 0x00, //  ############
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    // @2664 'E' (17 pixels wide)
    0x7F, 0xFF, 0x00, //  ###############
    0x7F, 0xFF, 0x00, //  ###############
    0x7F, 0xFF, 0x00, //  ###############
    0x70, 0x00, 0x00, //  ###
    0x70, 0x00, 0x00, //  ###
    0x70, 0x00, 0x00, //  ###
    0x70, 0x00, 0x00, //  ###
    0x70, 0x00, 0x00, //  ###
    0x70, 0x00, 0x00, //  ###
    0x7F, 0xF8, 0x00, //  ############
    0x7F, 0xF8, 0x00, //  ############
    0x7F, 0xF8, 0x00, //  ############
    0x70, 0x00, 0x00, //  ###
    0x70, 0x00, 0x00, //  ###
    0x70, 0x00, 0x00, //  ###
    0x70, 0x00, 0x00, //  ###
    0x70, 0x00, 0x00, //  ###
    0x70, 0x00, 0x00, //  ###
    0x7F, 0xFF, 0x00, //  ###############
    0x7F, 0xFF, 0x00, //  ###############
    0x7F, 0xFF, 0x00, //  ###############
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    // @2736 'F' (17 pixels wide)
    0x7F, 0xFF, 0x00, //  ###############
    0x7F, 0xFF, 0x00, //  ###############
    0x7F, 0xFF, 0x00, //  ###############
    0x70, 0x00, 0x00, //  ###
    0x70, 0x00, 0x00, //  ###
    0x70, 0x00, 0x00, //  ###
    0x70, 0x00, 0x00, //  ###
    0x70, 0x00, 0x00, //  ###
    0x70, 0x00, 0x00, //  ###
    0x7F, 0xF8, 0x00, //  ############
    0x7F, 0xF8, 0x00, //  ############
    0x7F, 0xF8, 0x00, //  ############
    0x70, 0x00, 0x00, //  ###
    0x70, 0x00, 0x00, //  ###
    0x70, 0x00, 0x00, //  ###
    0x70, 0x00, 0x00, //  ###
    0x70, 0x00, 0x00, //  ###
    0x70, 0x00, 0x00, //  ###
    0x70, 0x00, 0x00, //  ###
    0x70, 0x00, 0x00, //  ###
    0x70, 0x00, 0x00, //  ###
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    // @2808 'G' (17 pixels wide)
    0x0F, 0xFF, 0x00, //     ############
    0x0F, 0xFF, 0x00, //     ############
    0x0F, 0xFF, 0x00, //     ############
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x00, 0x00, //  ###
    0x70, 0x00, 0x00, //  ###
    0x70, 0x00, 0x00, //  ###
    0x70, 0x00, 0x00, //  ###
    0x70, 0x00, 0x00, //  ###
    0x70, 0x00, 0x00, //  ###
    0x70, 0x3F, 0x00, //  ###      ######
    0x70, 0x3F, 0x00, //  ###      ######
    0x70, 0x3F, 0x00, //  ###      ######
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x0F, 0xFF, 0x00, //     ############
    0x0F, 0xFF, 0x00, //     ############
    0x0F, 0xFF, 0x00, //     ############
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    // @2880 'H' (17 pixels wide)
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x7F, 0xFF, 0x00, //  ###############
    0x7F, 0xFF, 0x00, //  ###############
    0x7F, 0xFF, 0x00, //  ###############
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    // @2952 'I' (17 pixels wide)
    0x0F, 0xF8, 0x00, //     #########
    0x0F, 0xF8, 0x00, //     #########
    0x0F, 0xF8, 0x00, //     #########
    0x01, 0xC0, 0x00, //        ###
    0x01, 0xC0, 0x00, //        ###
    0x01, 0xC0, 0x00, //        ###
    0x01, 0xC0, 0x00, //        ###
    0x01, 0xC0, 0x00, //        ###
    0x01, 0xC0, 0x00, //        ###
    0x01, 0xC0, 0x00, //        ###
    0x01, 0xC0, 0x00, //        ###
    0x01, 0xC0, 0x00, //        ###
    0x01, 0xC0, 0x00, //        ###
    0x01, 0xC0, 0x00, //        ###
    0x01, 0xC0, 0x00, //        ###
    0x01, 0xC0, 0x00, //        ###
    0x01, 0xC0, 0x00, //        ###
    0x01, 0xC0, 0x00, //        ###
    0x0F, 0xF8, 0x00, //     #########
    0x0F, 0xF8, 0x00, //     #########
    0x0F, 0xF8, 0x00, //     #########
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    // @3024 'J' (17 pixels wide)
    0x01, 0xFF, 0x00, //        #########
    0x01, 0xFF, 0x00, //        #########
    0x01, 0xFF, 0x00, //        #########
    0x00, 0x38, 0x00, //           ###
    0x00, 0x38, 0x00, //           ###
    0x00, 0x38, 0x00, //           ###
    0x00, 0x38, 0x00, //           ###
    0x00, 0x38, 0x00, //           ###
    0x00, 0x38, 0x00, //           ###
    0x00, 0x38, 0x00, //           ###
    0x00, 0x38, 0x00, //           ###
    0x00, 0x38, 0x00, //           ###
    0x00, 0x38, 0x00, //           ###
    0x00, 0x38, 0x00, //           ###
    0x00, 0x38, 0x00, //           ###
    0x70, 0x38, 0x00, //  ###      ###
    0x70, 0x38, 0x00, //  ###      ###
    0x70, 0x38, 0x00, //  ###      ###
    0x0F, 0xC0, 0x00, //     ######
    0x0F, 0xC0, 0x00, //     ######
    0x0F, 0xC0, 0x00, //     ######
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    // @3096 'K' (17 pixels wide)
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x38, 0x00, //  ###      ###
    0x70, 0x38, 0x00, //  ###      ###
    0x70, 0x38, 0x00, //  ###      ###
    0x71, 0xC0, 0x00, //  ###   ###
    0x71, 0xC0, 0x00, //  ###   ###
    0x71, 0xC0, 0x00, //  ###   ###
    0x7E, 0x00, 0x00, //  ######
    0x7E, 0x00, 0x00, //  ######
    0x7E, 0x00, 0x00, //  ######
    0x71, 0xC0, 0x00, //  ###   ###
    0x71, 0xC0, 0x00, //  ###   ###
    0x71, 0xC0, 0x00, //  ###   ###
    0x70, 0x38, 0x00, //  ###      ###
    0x70, 0x38, 0x00, //  ###      ###
    0x70, 0x38, 0x00, //  ###      ###
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    // @3168 'L' (17 pixels wide)
    0x70, 0x00, 0x00, //  ###
    0x70, 0x00, 0x00, //  ###
    0x70, 0x00, 0x00, //  ###
    0x70, 0x00, 0x00, //  ###
    0x70, 0x00, 0x00, //  ###
    0x70, 0x00, 0x00, //  ###
    0x70, 0x00, 0x00, //  ###
    0x70, 0x00, 0x00, //  ###
    0x70, 0x00, 0x00, //  ###
    0x70, 0x00, 0x00, //  ###
    0x70, 0x00, 0x00, //  ###
    0x70, 0x00, 0x00, //  ###
    0x70, 0x00, 0x00, //  ###
    0x70, 0x00, 0x00, //  ###
    0x70, 0x00, 0x00, //  ###
    0x70, 0x00, 0x00, //  ###
    0x70, 0x00, 0x00, //  ###
    0x70, 0x00, 0x00, //  ###
    0x7F, 0xFF, 0x00, //  ###############
    0x7F, 0xFF, 0x00, //  ###############
    0x7F, 0xFF, 0x00, //  ###############
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    // @3240 'M' (17 pixels wide)
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x7E, 0x3F, 0x00, //  ######   ######
    0x7E, 0x3F, 0x00, //  ######   ######
    0x7E, 0x3F, 0x00, //  ######   ######
    0x71, 0xC7, 0x00, //  ###   ###   ###
    0x71, 0xC7, 0x00, //  ###   ###   ###
    0x71, 0xC7, 0x00, //  ###   ###   ###
    0x71, 0xC7, 0x00, //  ###   ###   ###
    0x71, 0xC7, 0x00, //  ###   ###   ###
    0x71, 0xC7, 0x00, //  ###   ###   ###
    0x71, 0xC7, 0x00, //  ###   ###   ###
    0x71, 0xC7, 0x00, //  ###   ###   ###
    0x71, 0xC7, 0x00, //  ###   ###   ###
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    // @3312 'N' (17 pixels wide)
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x7E, 0x07, 0x00, //  ######      ###
    0x7E, 0x07, 0x00, //  ######      ###
    0x7E, 0x07, 0x00, //  ######      ###
    0x71, 0xC7, 0x00, //  ###   ###   ###
    0x71, 0xC7, 0x00, //  ###   ###   ###
    0x71, 0xC7, 0x00, //  ###   ###   ###
    0x70, 0x3F, 0x00, //  ###      ######
    0x70, 0x3F, 0x00, //  ###      ######
    0x70, 0x3F, 0x00, //  ###      ######
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    // @3384 'O' (17 pixels wide)
    0x0F, 0xF8, 0x00, //     #########
    0x0F, 0xF8, 0x00, //     #########
    0x0F, 0xF8, 0x00, //     #########
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x0F, 0xF8, 0x00, //     #########
    0x0F, 0xF8, 0x00, //     #########
    0x0F, 0xF8, 0x00, //     #########
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    // @3456 'P' (17 pixels wide)
    0x7F, 0xF8, 0x00, //  ############
    0x7F, 0xF8, 0x00, //  ############
    0x7F, 0xF8, 0x00, //  ############
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x7F, 0xF8, 0x00, //  ############
    0x7F, 0xF8, 0x00, //  ############
    0x7F, 0xF8, 0x00, //  ############
    0x70, 0x00, 0x00, //  ###
    0x70, 0x00, 0x00, //  ###
    0x70, 0x00, 0x00, //  ###
    0x70, 0x00, 0x00, //  ###
    0x70, 0x00, 0x00, //  ###
    0x70, 0x00, 0x00, //  ###
    0x70, 0x00, 0x00, //  ###
    0x70, 0x00, 0x00, //  ###
    0x70, 0x00, 0x00, //  ###
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    // @3528 'Q' (17 pixels wide)
    0x0F, 0xF8, 0x00, //     #########
    0x0F, 0xF8, 0x00, //     #########
    0x0F, 0xF8, 0x00, //     #########
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x71, 0xC7, 0x00, //  ###   ###   ###
    0x71, 0xC7, 0x00, //  ###   ###   ###
    0x71, 0xC7, 0x00, //  ###   ###   ###
    0x70, 0x38, 0x00, //  ###      ###
    0x70, 0x38, 0x00, //  ###      ###
    0x70, 0x38, 0x00, //  ###      ###
    0x0F, 0xC7, 0x00, //     ######   ###
    0x0F, 0xC7, 0x00, //     ######   ###
    0x0F, 0xC7, 0x00, //     ######   ###
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    // @3600 'R' (17 pixels wide)
    0x7F, 0xF8, 0x00, //  ############
    0x7F, 0xF8, 0x00, //  ############
    0x7F, 0xF8, 0x00, //  ############
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x7F, 0xF8, 0x00, //  ############
    0x7F, 0xF8, 0x00, //  ############
    0x7F, 0xF8, 0x00, //  ############
    0x71, 0xC0, 0x00, //  ###   ###
    0x71, 0xC0, 0x00, //  ###   ###
    0x71, 0xC0, 0x00, //  ###   ###
    0x70, 0x38, 0x00, //  ###      ###
    0x70, 0x38, 0x00, //  ###      ###
    0x70, 0x38, 0x00, //  ###      ###
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    // @3672 'S' (17 pixels wide)
    0x0F, 0xF8, 0x00, //     #########
    0x0F, 0xF8, 0x00, //     #########
    0x0F, 0xF8, 0x00, //     #########
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x00, 0x00, //  ###
    0x70, 0x00, 0x00, //  ###
    0x70, 0x00, 0x00, //  ###
    0x0F, 0xF8, 0x00, //     #########
    0x0F, 0xF8, 0x00, //     #########
    0x0F, 0xF8, 0x00, //     #########
    0x00, 0x07, 0x00, //              ###
    0x00, 0x07, 0x00, //              ###
    0x00, 0x07, 0x00, //              ###
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x0F, 0xF8, 0x00, //     #########
    0x0F, 0xF8, 0x00, //     #########
    0x0F, 0xF8, 0x00, //     #########
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    // @3744 'T' (17 pixels wide)
    0x7F, 0xFF, 0x00, //  ###############
    0x7F, 0xFF, 0x00, //  ###############
    0x7F, 0xFF, 0x00, //  ###############
    0x71, 0xC7, 0x00, //  ###   ###   ###
    0x71, 0xC7, 0x00, //  ###   ###   ###
    0x71, 0xC7, 0x00, //  ###   ###   ###
    0x01, 0xC0, 0x00, //        ###
    0x01, 0xC0, 0x00, //        ###
    0x01, 0xC0, 0x00, //        ###
    0x01, 0xC0, 0x00, //        ###
    0x01, 0xC0, 0x00, //        ###
    0x01, 0xC0, 0x00, //        ###
    0x01, 0xC0, 0x00, //        ###
    0x01, 0xC0, 0x00, //        ###
    0x01, 0xC0, 0x00, //        ###
    0x01, 0xC0, 0x00, //        ###
    0x01, 0xC0, 0x00, //        ###
    0x01, 0xC0, 0x00, //        ###
    0x01, 0xC0, 0x00, //        ###
    0x01, 0xC0, 0x00, //        ###
    0x01, 0xC0, 0x00, //        ###
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    // @3816 'U' (17 pixels wide)
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x0F, 0xF8, 0x00, //     #########
    0x0F, 0xF8, 0x00, //     #########
    0x0F, 0xF8, 0x00, //     #########
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    // @3888 'V' (17 pixels wide)
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x0E, 0x38, 0x00, //     ###   ###
    0x0E, 0x38, 0x00, //     ###   ###
    0x0E, 0x38, 0x00, //     ###   ###
    0x01, 0xC0, 0x00, //        ###
    0x01, 0xC0, 0x00, //        ###
    0x01, 0xC0, 0x00, //        ###
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    // @3960 'W' (17 pixels wide)
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x71, 0xC7, 0x00, //  ###   ###   ###
    0x71, 0xC7, 0x00, //  ###   ###   ###
    0x71, 0xC7, 0x00, //  ###   ###   ###
    0x71, 0xC7, 0x00, //  ###   ###   ###
    0x71, 0xC7, 0x00, //  ###   ###   ###
    0x71, 0xC7, 0x00, //  ###   ###   ###
    0x71, 0xC7, 0x00, //  ###   ###   ###
    0x71, 0xC7, 0x00, //  ###   ###   ###
    0x71, 0xC7, 0x00, //  ###   ###   ###
    0x0E, 0x38, 0x00, //     ###   ###
    0x0E, 0x38, 0x00, //     ###   ###
    0x0E, 0x38, 0x00, //     ###   ###
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    // @4032 'X' (17 pixels wide)
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x0E, 0x38, 0x00, //     ###   ###
    0x0E, 0x38, 0x00, //     ###   ###
    0x0E, 0x38, 0x00, //     ###   ###
    0x01, 0xC0, 0x00, //        ###
    0x01, 0xC0, 0x00, //        ###
    0x01, 0xC0, 0x00, //        ###
    0x0E, 0x38, 0x00, //     ###   ###
    0x0E, 0x38, 0x00, //     ###   ###
    0x0E, 0x38, 0x00, //     ###   ###
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    // @4104 'Y' (17 pixels wide)
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x0E, 0x38, 0x00, //     ###   ###
    0x0E, 0x38, 0x00, //     ###   ###
    0x0E, 0x38, 0x00, //     ###   ###
    0x01, 0xC0, 0x00, //        ###
    0x01, 0xC0, 0x00, //        ###
    0x01, 0xC0, 0x00, //        ###
    0x01, 0xC0, 0x00, //        ###
    0x01, 0xC0, 0x00, //        ###
    0x01, 0xC0, 0x00, //        ###
    0x01, 0xC0, 0x00, //        ###
    0x01, 0xC0, 0x00, //        ###
    0x01, 0xC0, 0x00, //        ###
    0x01, 0xC0, 0x00, //        ###
    0x01, 0xC0, 0x00, //        ###
    0x01, 0xC0, 0x00, //        ###
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    // @4176 'Z' (17 pixels wide)
    0x7F, 0xFF, 0x00, //  ###############
    0x7F, 0xFF, 0x00, //  ###############
    0x7F, 0xFF, 0x00, //  ###############
    0x00, 0x07, 0x00, //              ###
    0x00, 0x07, 0x00, //              ###
    0x00, 0x07, 0x00, //              ###
    0x00, 0x38, 0x00, //           ###
    0x00, 0x38, 0x00, //           ###
    0x00, 0x38, 0x00, //           ###
    0x0F, 0xF8, 0x00, //     #########
    0x0F, 0xF8, 0x00, //     #########
    0x0F, 0xF8, 0x00, //     #########
    0x0E, 0x00, 0x00, //     ###
    0x0E, 0x00, 0x00, //     ###
    0x0E, 0x00, 0x00, //     ###
    0x70, 0x00, 0x00, //  ###
    0x70, 0x00, 0x00, //  ###
    0x70, 0x00, 0x00, //  ###
    0x7F, 0xFF, 0x00, //  ###############
    0x7F, 0xFF, 0x00, //  ###############
    0x7F, 0xFF, 0x00, //  ###############
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    // @4248 '[' (17 pixels wide)
    0x0F, 0xFF, 0x00, //     ############
    0x0F, 0xFF, 0x00, //     ############
    0x0F, 0xFF, 0x00, //     ############
    0x0E, 0x00, 0x00, //     ###
    0x0E, 0x00, 0x00, //     ###
    0x0E, 0x00, 0x00, //     ###
    0x0E, 0x00, 0x00, //     ###
    0x0E, 0x00, 0x00, //     ###
    0x0E, 0x00, 0x00, //     ###
    0x0E, 0x00, 0x00, //     ###
    0x0E, 0x00, 0x00, //     ###
    0x0E, 0x00, 0x00, //     ###
    0x0E, 0x00, 0x00, //     ###
    0x0E, 0x00, 0x00, //     ###
    0x0E, 0x00, 0x00, //     ###
    0x0E, 0x00, 0x00, //     ###
    0x0E, 0x00, 0x00, //     ###
    0x0E, 0x00, 0x00, //     ###
    0x0F, 0xFF, 0x00, //     ############
    0x0F, 0xFF, 0x00, //     ############
    0x0F, 0xFF, 0x00, //     ############
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    // @4320 '\\' (17 pixels wide)
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x70, 0x00, 0x00, //  ###
    0x70, 0x00, 0x00, //  ###
    0x70, 0x00, 0x00, //  ###
    0x0E, 0x00, 0x00, //     ###
    0x0E, 0x00, 0x00, //     ###
    0x0E, 0x00, 0x00, //     ###
    0x01, 0xC0, 0x00, //        ###
    0x01, 0xC0, 0x00, //        ###
    0x01, 0xC0, 0x00, //        ###
    0x00, 0x38, 0x00, //           ###
    0x00, 0x38, 0x00, //           ###
    0x00, 0x38, 0x00, //           ###
    0x00, 0x07, 0x00, //              ###
    0x00, 0x07, 0x00, //              ###
    0x00, 0x07, 0x00, //              ###
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    // @4392 ']' (17 pixels wide)
    0x0F, 0xFF, 0x00, //     ############
    0x0F, 0xFF, 0x00, //     ############
    0x0F, 0xFF, 0x00, //     ############
    0x00, 0x07, 0x00, //              ###
    0x00, 0x07, 0x00, //              ###
    0x00, 0x07, 0x00, //              ###
    0x00, 0x07, 0x00, //              ###
    0x00, 0x07, 0x00, //              ###
    0x00, 0x07, 0x00, //              ###
    0x00, 0x07, 0x00, //              ###
    0x00, 0x07, 0x00, //              ###
    0x00, 0x07, 0x00, //              ###
    0x00, 0x07, 0x00, //              ###
    0x00, 0x07, 0x00, //              ###
    0x00, 0x07, 0x00, //              ###
    0x00, 0x07, 0x00, //              ###
    0x00, 0x07, 0x00, //              ###
    0x00, 0x07, 0x00, //              ###
    0x0F, 0xFF, 0x00, //     ############
    0x0F, 0xFF, 0x00, //     ############
    0x0F, 0xFF, 0x00, //     ############
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    // @4464 '^' (17 pixels wide)
    0x01, 0xC0, 0x00, //        ###
    0x01, 0xC0, 0x00, //        ###
    0x01, 0xC0, 0x00, //        ###
    0x0E, 0x38, 0x00, //     ###   ###
    0x0E, 0x38, 0x00, //     ###   ###
    0x0E, 0x38, 0x00, //     ###   ###
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    // @4536 '_' (17 pixels wide)
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x7F, 0xFF, 0x00, //  ###############
    0x7F, 0xFF, 0x00, //  ###############
    0x7F, 0xFF, 0x00, //  ###############
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    // @4608 '`' (17 pixels wide)
    0x0F, 0xC0, 0x00, //     ######
    0x0F, 0xC0, 0x00, //     ######
    0x0F, 0xC0, 0x00, //     ######
    0x0F, 0xC0, 0x00, //     ######
    0x0F, 0xC0, 0x00, //     ######
    0x0F, 0xC0, 0x00, //     ######
    0x01, 0xC0, 0x00, //        ###
    0x01, 0xC0, 0x00, //        ###
    0x01, 0xC0, 0x00, //        ###
    0x00, 0x38, 0x00, //           ###
    0x00, 0x38, 0x00, //           ###
    0x00, 0x38, 0x00, //           ###
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    // @4680 'a' (17 pixels wide)
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x0F, 0xC0, 0x00, //     ######
    0x0F, 0xC0, 0x00, //     ######
    0x0F, 0xC0, 0x00, //     ######
    0x00, 0x38, 0x00, //           ###
    0x00, 0x38, 0x00, //           ###
    0x00, 0x38, 0x00, //           ###
    0x0F, 0xF8, 0x00, //     #########
    0x0F, 0xF8, 0x00, //     #########
    0x0F, 0xF8, 0x00, //     #########
    0x70, 0x38, 0x00, //  ###      ###
    0x70, 0x38, 0x00, //  ###      ###
    0x70, 0x38, 0x00, //  ###      ###
    0x0F, 0xFF, 0x00, //     ############
    0x0F, 0xFF, 0x00, //     ############
    0x0F, 0xFF, 0x00, //     ############
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    // @4752 'b' (17 pixels wide)
    0x70, 0x00, 0x00, //  ###
    0x70, 0x00, 0x00, //  ###
    0x70, 0x00, 0x00, //  ###
    0x70, 0x00, 0x00, //  ###
    0x70, 0x00, 0x00, //  ###
    0x70, 0x00, 0x00, //  ###
    0x71, 0xF8, 0x00, //  ###   ######
    0x71, 0xF8, 0x00, //  ###   ######
    0x71, 0xF8, 0x00, //  ###   ######
    0x7E, 0x07, 0x00, //  ######      ###
    0x7E, 0x07, 0x00, //  ######      ###
    0x7E, 0x07, 0x00, //  ######      ###
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x7E, 0x07, 0x00, //  ######      ###
    0x7E, 0x07, 0x00, //  ######      ###
    0x7E, 0x07, 0x00, //  ######      ###
    0x71, 0xF8, 0x00, //  ###   ######
    0x71, 0xF8, 0x00, //  ###   ######
    0x71, 0xF8, 0x00, //  ###   ######
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    // @4824 'c' (17 pixels wide)
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x0F, 0xF8, 0x00, //     #########
    0x0F, 0xF8, 0x00, //     #########
    0x0F, 0xF8, 0x00, //     #########
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x00, 0x00, //  ###
    0x70, 0x00, 0x00, //  ###
    0x70, 0x00, 0x00, //  ###
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x0F, 0xF8, 0x00, //     #########
    0x0F, 0xF8, 0x00, //     #########
    0x0F, 0xF8, 0x00, //     #########
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    // @4896 'd' (17 pixels wide)
    0x00, 0x07, 0x00, //              ###
    0x00, 0x07, 0x00, //              ###
    0x00, 0x07, 0x00, //              ###
    0x00, 0x07, 0x00, //              ###
    0x00, 0x07, 0x00, //              ###
    0x00, 0x07, 0x00, //              ###
    0x0F, 0xC7, 0x00, //     ######   ###
    0x0F, 0xC7, 0x00, //     ######   ###
    0x0F, 0xC7, 0x00, //     ######   ###
    0x70, 0x3F, 0x00, //  ###      ######
    0x70, 0x3F, 0x00, //  ###      ######
    0x70, 0x3F, 0x00, //  ###      ######
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x3F, 0x00, //  ###      ######
    0x70, 0x3F, 0x00, //  ###      ######
    0x70, 0x3F, 0x00, //  ###      ######
    0x0F, 0xC7, 0x00, //     ######   ###
    0x0F, 0xC7, 0x00, //     ######   ###
    0x0F, 0xC7, 0x00, //     ######   ###
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    // @4968 'e' (17 pixels wide)
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x0F, 0xF8, 0x00, //     #########
    0x0F, 0xF8, 0x00, //     #########
    0x0F, 0xF8, 0x00, //     #########
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x7F, 0xFF, 0x00, //  ###############
    0x7F, 0xFF, 0x00, //  ###############
    0x7F, 0xFF, 0x00, //  ###############
    0x70, 0x00, 0x00, //  ###
    0x70, 0x00, 0x00, //  ###
    0x70, 0x00, 0x00, //  ###
    0x0F, 0xF8, 0x00, //     #########
    0x0F, 0xF8, 0x00, //     #########
    0x0F, 0xF8, 0x00, //     #########
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    // @5040 'f' (17 pixels wide)
    0x00, 0x38, 0x00, //           ###
    0x00, 0x38, 0x00, //           ###
    0x00, 0x38, 0x00, //           ###
    0x01, 0xC7, 0x00, //        ###   ###
    0x01, 0xC7, 0x00, //        ###   ###
    0x01, 0xC7, 0x00, //        ###   ###
    0x01, 0xC0, 0x00, //        ###
    0x01, 0xC0, 0x00, //        ###
    0x01, 0xC0, 0x00, //        ###
    0x0F, 0xF8, 0x00, //     #########
    0x0F, 0xF8, 0x00, //     #########
    0x0F, 0xF8, 0x00, //     #########
    0x01, 0xC0, 0x00, //        ###
    0x01, 0xC0, 0x00, //        ###
    0x01, 0xC0, 0x00, //        ###
    0x01, 0xC0, 0x00, //        ###
    0x01, 0xC0, 0x00, //        ###
    0x01, 0xC0, 0x00, //        ###
    0x01, 0xC0, 0x00, //        ###
    0x01, 0xC0, 0x00, //        ###
    0x01, 0xC0, 0x00, //        ###
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    // @5112 'g' (17 pixels wide)
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x0F, 0xF8, 0x00, //     #########
    0x0F, 0xF8, 0x00, //     #########
    0x0F, 0xF8, 0x00, //     #########
    0x70, 0x3F, 0x00, //  ###      ######
    0x70, 0x3F, 0x00, //  ###      ######
    0x70, 0x3F, 0x00, //  ###      ######
    0x70, 0x3F, 0x00, //  ###      ######
    0x70, 0x3F, 0x00, //  ###      ######
    0x70, 0x3F, 0x00, //  ###      ######
    0x0F, 0xC7, 0x00, //     ######   ###
    0x0F, 0xC7, 0x00, //     ######   ###
    0x0F, 0xC7, 0x00, //     ######   ###
    0x00, 0x07, 0x00, //              ###
    0x00, 0x07, 0x00, //              ###
    0x00, 0x07, 0x00, //              ###
    0x0F, 0xF8, 0x00, //     #########
    0x0F, 0xF8, 0x00, //     #########
    0x0F, 0xF8, 0x00, //     #########
    // @5184 'h' (17 pixels wide)
    0x70, 0x00, 0x00, //  ###
    0x70, 0x00, 0x00, //  ###
    0x70, 0x00, 0x00, //  ###
    0x70, 0x00, 0x00, //  ###
    0x70, 0x00, 0x00, //  ###
    0x70, 0x00, 0x00, //  ###
    0x71, 0xF8, 0x00, //  ###   ######
    0x71, 0xF8, 0x00, //  ###   ######
    0x71, 0xF8, 0x00, //  ###   ######
    0x7E, 0x07, 0x00, //  ######      ###
    0x7E, 0x07, 0x00, //  ######      ###
    0x7E, 0x07, 0x00, //  ######      ###
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    // @5256 'i' (17 pixels wide)
    0x01, 0xC0, 0x00, //        ###
    0x01, 0xC0, 0x00, //        ###
    0x01, 0xC0, 0x00, //        ###
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x0F, 0xC0, 0x00, //     ######
    0x0F, 0xC0, 0x00, //     ######
    0x0F, 0xC0, 0x00, //     ######
    0x01, 0xC0, 0x00, //        ###
    0x01, 0xC0, 0x00, //        ###
    0x01, 0xC0, 0x00, //        ###
    0x01, 0xC0, 0x00, //        ###
    0x01, 0xC0, 0x00, //        ###
    0x01, 0xC0, 0x00, //        ###
    0x01, 0xC0, 0x00, //        ###
    0x01, 0xC0, 0x00, //        ###
    0x01, 0xC0, 0x00, //        ###
    0x0F, 0xF8, 0x00, //     #########
    0x0F, 0xF8, 0x00, //     #########
    0x0F, 0xF8, 0x00, //     #########
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    // @5328 'j' (17 pixels wide)
    0x00, 0x38, 0x00, //           ###
    0x00, 0x38, 0x00, //           ###
    0x00, 0x38, 0x00, //           ###
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x38, 0x00, //           ###
    0x00, 0x38, 0x00, //           ###
    0x00, 0x38, 0x00, //           ###
    0x00, 0x38, 0x00, //           ###
    0x00, 0x38, 0x00, //           ###
    0x00, 0x38, 0x00, //           ###
    0x00, 0x38, 0x00, //           ###
    0x00, 0x38, 0x00, //           ###
    0x00, 0x38, 0x00, //           ###
    0x70, 0x38, 0x00, //  ###      ###
    0x70, 0x38, 0x00, //  ###      ###
    0x70, 0x38, 0x00, //  ###      ###
    0x0F, 0xC0, 0x00, //     ######
    0x0F, 0xC0, 0x00, //     ######
    0x0F, 0xC0, 0x00, //     ######
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    // @5400 'k' (17 pixels wide)
    0x70, 0x00, 0x00, //  ###
    0x70, 0x00, 0x00, //  ###
    0x70, 0x00, 0x00, //  ###
    0x70, 0x00, 0x00, //  ###
    0x70, 0x00, 0x00, //  ###
    0x70, 0x00, 0x00, //  ###
    0x70, 0x38, 0x00, //  ###      ###
    0x70, 0x38, 0x00, //  ###      ###
    0x70, 0x38, 0x00, //  ###      ###
    0x71, 0xC0, 0x00, //  ###   ###
    0x71, 0xC0, 0x00, //  ###   ###
    0x71, 0xC0, 0x00, //  ###   ###
    0x7E, 0x00, 0x00, //  ######
    0x7E, 0x00, 0x00, //  ######
    0x7E, 0x00, 0x00, //  ######
    0x71, 0xC0, 0x00, //  ###   ###
    0x71, 0xC0, 0x00, //  ###   ###
    0x71, 0xC0, 0x00, //  ###   ###
    0x70, 0x38, 0x00, //  ###      ###
    0x70, 0x38, 0x00, //  ###      ###
    0x70, 0x38, 0x00, //  ###      ###
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    // @5472 'l' (17 pixels wide)
    0x0F, 0xC0, 0x00, //     ######
    0x0F, 0xC0, 0x00, //     ######
    0x0F, 0xC0, 0x00, //     ######
    0x01, 0xC0, 0x00, //        ###
    0x01, 0xC0, 0x00, //        ###
    0x01, 0xC0, 0x00, //        ###
    0x01, 0xC0, 0x00, //        ###
    0x01, 0xC0, 0x00, //        ###
    0x01, 0xC0, 0x00, //        ###
    0x01, 0xC0, 0x00, //        ###
    0x01, 0xC0, 0x00, //        ###
    0x01, 0xC0, 0x00, //        ###
    0x01, 0xC0, 0x00, //        ###
    0x01, 0xC0, 0x00, //        ###
    0x01, 0xC0, 0x00, //        ###
    0x01, 0xC0, 0x00, //        ###
    0x01, 0xC0, 0x00, //        ###
    0x01, 0xC0, 0x00, //        ###
    0x0F, 0xF8, 0x00, //     #########
    0x0F, 0xF8, 0x00, //     #########
    0x0F, 0xF8, 0x00, //     #########
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    // @5544 'm' (17 pixels wide)
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x7E, 0x38, 0x00, //  ######   ###
    0x7E, 0x38, 0x00, //  ######   ###
    0x7E, 0x38, 0x00, //  ######   ###
    0x71, 0xC7, 0x00, //  ###   ###   ###
    0x71, 0xC7, 0x00, //  ###   ###   ###
    0x71, 0xC7, 0x00, //  ###   ###   ###
    0x71, 0xC7, 0x00, //  ###   ###   ###
    0x71, 0xC7, 0x00, //  ###   ###   ###
    0x71, 0xC7, 0x00, //  ###   ###   ###
    0x71, 0xC7, 0x00, //  ###   ###   ###
    0x71, 0xC7, 0x00, //  ###   ###   ###
    0x71, 0xC7, 0x00, //  ###   ###   ###
    0x71, 0xC7, 0x00, //  ###   ###   ###
    0x71, 0xC7, 0x00, //  ###   ###   ###
    0x71, 0xC7, 0x00, //  ###   ###   ###
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    // @5616 'n' (17 pixels wide)
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x71, 0xF8, 0x00, //  ###   ######
    0x71, 0xF8, 0x00, //  ###   ######
    0x71, 0xF8, 0x00, //  ###   ######
    0x7E, 0x07, 0x00, //  ######      ###
    0x7E, 0x07, 0x00, //  ######      ###
    0x7E, 0x07, 0x00, //  ######      ###
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    // @5688 'o' (17 pixels wide)
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x0F, 0xF8, 0x00, //     #########
    0x0F, 0xF8, 0x00, //     #########
    0x0F, 0xF8, 0x00, //     #########
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x0F, 0xF8, 0x00, //     #########
    0x0F, 0xF8, 0x00, //     #########
    0x0F, 0xF8, 0x00, //     #########
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    // @5760 'p' (17 pixels wide)
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x71, 0xF8, 0x00, //  ###   ######
    0x71, 0xF8, 0x00, //  ###   ######
    0x71, 0xF8, 0x00, //  ###   ######
    0x7E, 0x07, 0x00, //  ######      ###
    0x7E, 0x07, 0x00, //  ######      ###
    0x7E, 0x07, 0x00, //  ######      ###
    0x7E, 0x07, 0x00, //  ######      ###
    0x7E, 0x07, 0x00, //  ######      ###
    0x7E, 0x07, 0x00, //  ######      ###
    0x71, 0xF8, 0x00, //  ###   ######
    0x71, 0xF8, 0x00, //  ###   ######
    0x71, 0xF8, 0x00, //  ###   ######
    0x70, 0x00, 0x00, //  ###
    0x70, 0x00, 0x00, //  ###
    0x70, 0x00, 0x00, //  ###
    0x70, 0x00, 0x00, //  ###
    0x70, 0x00, 0x00, //  ###
    0x70, 0x00, 0x00, //  ###
    // @5832 'q' (17 pixels wide)
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x0F, 0xC7, 0x00, //     ######   ###
    0x0F, 0xC7, 0x00, //     ######   ###
    0x0F, 0xC7, 0x00, //     ######   ###
    0x70, 0x3F, 0x00, //  ###      ######
    0x70, 0x3F, 0x00, //  ###      ######
    0x70, 0x3F, 0x00, //  ###      ######
    0x70, 0x3F, 0x00, //  ###      ######
    0x70, 0x3F, 0x00, //  ###      ######
    0x70, 0x3F, 0x00, //  ###      ######
    0x0F, 0xC7, 0x00, //     ######   ###
    0x0F, 0xC7, 0x00, //     ######   ###
    0x0F, 0xC7, 0x00, //     ######   ###
    0x00, 0x07, 0x00, //              ###
    0x00, 0x07, 0x00, //              ###
    0x00, 0x07, 0x00, //              ###
    0x00, 0x07, 0x00, //              ###
    0x00, 0x07, 0x00, //              ###
    0x00, 0x07, 0x00, //              ###
    // @5904 'r' (17 pixels wide)
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x71, 0xF8, 0x00, //  ###   ######
    0x71, 0xF8, 0x00, //  ###   ######
    0x71, 0xF8, 0x00, //  ###   ######
    0x7E, 0x07, 0x00, //  ######      ###
    0x7E, 0x07, 0x00, //  ######      ###
    0x7E, 0x07, 0x00, //  ######      ###
    0x70, 0x00, 0x00, //  ###
    0x70, 0x00, 0x00, //  ###
    0x70, 0x00, 0x00, //  ###
    0x70, 0x00, 0x00, //  ###
    0x70, 0x00, 0x00, //  ###
    0x70, 0x00, 0x00, //  ###
    0x70, 0x00, 0x00, //  ###
    0x70, 0x00, 0x00, //  ###
    0x70, 0x00, 0x00, //  ###
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    // @5976 's' (17 pixels wide)
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x0F, 0xFF, 0x00, //     ############
    0x0F, 0xFF, 0x00, //     ############
    0x0F, 0xFF, 0x00, //     ############
    0x70, 0x00, 0x00, //  ###
    0x70, 0x00, 0x00, //  ###
    0x70, 0x00, 0x00, //  ###
    0x0F, 0xF8, 0x00, //     #########
    0x0F, 0xF8, 0x00, //     #########
    0x0F, 0xF8, 0x00, //     #########
    0x00, 0x07, 0x00, //              ###
    0x00, 0x07, 0x00, //              ###
    0x00, 0x07, 0x00, //              ###
    0x7F, 0xF8, 0x00, //  ############
    0x7F, 0xF8, 0x00, //  ############
    0x7F, 0xF8, 0x00, //  ############
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    // @6048 't' (17 pixels wide)
    0x01, 0xC0, 0x00, //        ###
    0x01, 0xC0, 0x00, //        ###
    0x01, 0xC0, 0x00, //        ###
    0x01, 0xC0, 0x00, //        ###
    0x01, 0xC0, 0x00, //        ###
    0x01, 0xC0, 0x00, //        ###
    0x7F, 0xFF, 0x00, //  ###############
    0x7F, 0xFF, 0x00, //  ###############
    0x7F, 0xFF, 0x00, //  ###############
    0x01, 0xC0, 0x00, //        ###
    0x01, 0xC0, 0x00, //        ###
    0x01, 0xC0, 0x00, //        ###
    0x01, 0xC0, 0x00, //        ###
    0x01, 0xC0, 0x00, //        ###
    0x01, 0xC0, 0x00, //        ###
    0x01, 0xC7, 0x00, //        ###   ###
    0x01, 0xC7, 0x00, //        ###   ###
    0x01, 0xC7, 0x00, //        ###   ###
    0x00, 0x38, 0x00, //           ###
    0x00, 0x38, 0x00, //           ###
    0x00, 0x38, 0x00, //           ###
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    // @6120 'u' (17 pixels wide)
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x3F, 0x00, //  ###      ######
    0x70, 0x3F, 0x00, //  ###      ######
    0x70, 0x3F, 0x00, //  ###      ######
    0x0F, 0xC7, 0x00, //     ######   ###
    0x0F, 0xC7, 0x00, //     ######   ###
    0x0F, 0xC7, 0x00, //     ######   ###
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    // @6192 'v' (17 pixels wide)
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x0E, 0x38, 0x00, //     ###   ###
    0x0E, 0x38, 0x00, //     ###   ###
    0x0E, 0x38, 0x00, //     ###   ###
    0x01, 0xC0, 0x00, //        ###
    0x01, 0xC0, 0x00, //        ###
    0x01, 0xC0, 0x00, //        ###
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    // @6264 'w' (17 pixels wide)
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x71, 0xC7, 0x00, //  ###   ###   ###
    0x71, 0xC7, 0x00, //  ###   ###   ###
    0x71, 0xC7, 0x00, //  ###   ###   ###
    0x71, 0xC7, 0x00, //  ###   ###   ###
    0x71, 0xC7, 0x00, //  ###   ###   ###
    0x71, 0xC7, 0x00, //  ###   ###   ###
    0x0E, 0x38, 0x00, //     ###   ###
    0x0E, 0x38, 0x00, //     ###   ###
    0x0E, 0x38, 0x00, //     ###   ###
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    // @6336 'x' (17 pixels wide)
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x0E, 0x38, 0x00, //     ###   ###
    0x0E, 0x38, 0x00, //     ###   ###
    0x0E, 0x38, 0x00, //     ###   ###
    0x01, 0xC0, 0x00, //        ###
    0x01, 0xC0, 0x00, //        ###
    0x01, 0xC0, 0x00, //        ###
    0x0E, 0x38, 0x00, //     ###   ###
    0x0E, 0x38, 0x00, //     ###   ###
    0x0E, 0x38, 0x00, //     ###   ###
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    // @6408 'y' (17 pixels wide)
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x0F, 0xFF, 0x00, //     ############
    0x0F, 0xFF, 0x00, //     ############
    0x0F, 0xFF, 0x00, //     ############
    0x00, 0x07, 0x00, //              ###
    0x00, 0x07, 0x00, //              ###
    0x00, 0x07, 0x00, //              ###
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x70, 0x07, 0x00, //  ###         ###
    0x0F, 0xF8, 0x00, //     #########
    0x0F, 0xF8, 0x00, //     #########
    0x0F, 0xF8, 0x00, //     #########
    // @6480 'z' (17 pixels wide)
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x7F, 0xFF, 0x00, //  ###############
    0x7F, 0xFF, 0x00, //  ###############
    0x7F, 0xFF, 0x00, //  ###############
    0x00, 0x38, 0x00, //           ###
    0x00, 0x38, 0x00, //           ###
    0x00, 0x38, 0x00, //           ###
    0x01, 0xC0, 0x00, //        ###
    0x01, 0xC0, 0x00, //        ###
    0x01, 0xC0, 0x00, //        ###
    0x0E, 0x00, 0x00, //     ###
    0x0E, 0x00, 0x00, //     ###
    0x0E, 0x00, 0x00, //     ###
    0x7F, 0xFF, 0x00, //  ###############
    0x7F, 0xFF, 0x00, //  ###############
    0x7F, 0xFF, 0x00, //  ###############
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    // @6552 '{' (17 pixels wide)
    0x00, 0x38, 0x00, //           ###
    0x00, 0x38, 0x00, //           ###
    0x00, 0x38, 0x00, //           ###
    0x01, 0xC0, 0x00, //        ###
    0x01, 0xC0, 0x00, //        ###
    0x01, 0xC0, 0x00, //        ###
    0x01, 0xC0, 0x00, //        ###
    0x01, 0xC0, 0x00, //        ###
    0x01, 0xC0, 0x00, //        ###
    0x0E, 0x00, 0x00, //     ###
    0x0E, 0x00, 0x00, //     ###
    0x0E, 0x00, 0x00, //     ###
    0x01, 0xC0, 0x00, //        ###
    0x01, 0xC0, 0x00, //        ###
    0x01, 0xC0, 0x00, //        ###
    0x01, 0xC0, 0x00, //        ###
    0x01, 0xC0, 0x00, //        ###
    0x01, 0xC0, 0x00, //        ###
    0x00, 0x38, 0x00, //           ###
    0x00, 0x38, 0x00, //           ###
    0x00, 0x38, 0x00, //           ###
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    // @6624 '|' (17 pixels wide)
    0x01, 0xC0, 0x00, //        ###
    0x01, 0xC0, 0x00, //        ###
    0x01, 0xC0, 0x00, //        ###
    0x01, 0xC0, 0x00, //        ###
    0x01, 0xC0, 0x00, //        ###
    0x01, 0xC0, 0x00, //        ###
    0x01, 0xC0, 0x00, //        ###
    0x01, 0xC0, 0x00, //        ###
    0x01, 0xC0, 0x00, //        ###
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x01, 0xC0, 0x00, //        ###
    0x01, 0xC0, 0x00, //        ###
    0x01, 0xC0, 0x00, //        ###
    0x01, 0xC0, 0x00, //        ###
    0x01, 0xC0, 0x00, //        ###
    0x01, 0xC0, 0x00, //        ###
    0x01, 0xC0, 0x00, //        ###
    0x01, 0xC0, 0x00, //        ###
    0x01, 0xC0, 0x00, //        ###
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    // @6696 '}' (17 pixels wide)
    0x0E, 0x00, 0x00, //     ###
    0x0E, 0x00, 0x00, //     ###
    0x0E, 0x00, 0x00, //     ###
    0x01, 0xC0, 0x00, //        ###
    0x01, 0xC0, 0x00, //        ###
    0x01, 0xC0, 0x00, //        ###
    0x01, 0xC0, 0x00, //        ###
    0x01, 0xC0, 0x00, //        ###
    0x01, 0xC0, 0x00, //        ###
    0x00, 0x38, 0x00, //           ###
    0x00, 0x38, 0x00, //           ###
    0x00, 0x38, 0x00, //           ###
    0x01, 0xC0, 0x00, //        ###
    0x01, 0xC0, 0x00, //        ###
    0x01, 0xC0, 0x00, //        ###
    0x01, 0xC0, 0x00, //        ###
    0x01, 0xC0, 0x00, //        ###
    0x01, 0xC0, 0x00, //        ###
    0x0E, 0x00, 0x00, //     ###
    0x0E, 0x00, 0x00, //     ###
    0x0E, 0x00, 0x00, //     ###
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    // @6768 '~' (17 pixels wide)
    0x0E, 0x00, 0x00, //     ###
    0x0E, 0x00, 0x00, //     ###
    0x0E, 0x00, 0x00, //     ###
    0x71, 0xC7, 0x00, //  ###   ###   ###
    0x71, 0xC7, 0x00, //  ###   ###   ###
    0x71, 0xC7, 0x00, //  ###   ###   ###
    0x00, 0x38, 0x00, //           ###
    0x00, 0x38, 0x00, //           ###
    0x00, 0x38, 0x00, //           ###
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, //
];
