//! Names of every entity the agent refers to by identity.

pub mod items {
    use agent_core::ItemId;

    // Equipment
    pub const JUNE_CLEAVER: ItemId = ItemId::new("June cleaver");
    pub const COSPLAY_SABER: ItemId = ItemId::new("Fourth of May Cosplay Saber");
    pub const PROTON_PACK: ItemId = ItemId::new("protonic accelerator pack");
    pub const GREAT_WOLF_TROUSERS: ItemId = ItemId::new("Great Wolf's beastly trousers");
    pub const VOTED_STICKER: ItemId = ItemId::new("\"I Voted!\" sticker");
    pub const CURSED_MAGNIFYING_GLASS: ItemId = ItemId::new("cursed magnifying glass");
    pub const KRAMCO: ItemId = ItemId::new("Kramco Sausage-o-Matic™");
    pub const JURASSIC_PARKA: ItemId = ItemId::new("Jurassic Parka");
    pub const DRUNKULA_WINEGLASS: ItemId = ItemId::new("Drunkula's wineglass");
    pub const CRYSTAL_BALL: ItemId = ItemId::new("miniature crystal ball");
    pub const DEFT_PIRATE_HOOK: ItemId = ItemId::new("deft pirate hook");
    pub const POTTED_PLANT: ItemId = ItemId::new("carnivorous potted plant");
    pub const BUDDY_BJORN: ItemId = ItemId::new("Buddy Bjorn");
    pub const CROWN_OF_THRONES: ItemId = ItemId::new("Crown of Thrones");
    pub const TINY_STILLSUIT: ItemId = ItemId::new("tiny stillsuit");
    pub const AMULET_COIN: ItemId = ItemId::new("amulet coin");
    pub const DESIGNER_SWEATPANTS: ItemId = ItemId::new("designer sweatpants");
    pub const PANTSGIVING: ItemId = ItemId::new("Pantsgiving");
    pub const TEARAWAY_PANTS: ItemId = ItemId::new("tearaway pants");
    pub const MAFIA_THUMB_RING: ItemId = ItemId::new("mafia thumb ring");
    pub const LUCKY_GOLD_RING: ItemId = ItemId::new("lucky gold ring");
    pub const SCREEGE_SPECTACLES: ItemId = ItemId::new("Mr. Screege's spectacles");
    pub const CHEENG_SPECTACLES: ItemId = ItemId::new("Mr. Cheeng's spectacles");
    pub const GNOMISH_KGNEE: ItemId = ItemId::new("gnomish housemaid's kgnee");
    pub const BLUE_PLATE: ItemId = ItemId::new("blue plate");
    pub const BAG_OF_MANY_CONFECTIONS: ItemId = ItemId::new("bag of many confections");
    pub const SPRING_SHOES: ItemId = ItemId::new("spring shoes");
    pub const JOKESTERS_GUN: ItemId = ItemId::new("The Jokester's gun");
    pub const LIL_DOCTOR_BAG: ItemId = ItemId::new("Lil' Doctor™ bag");
    pub const SHERIFF_MOUSTACHE: ItemId = ItemId::new("Sheriff moustache");
    pub const SHERIFF_BADGE: ItemId = ItemId::new("Sheriff badge");
    pub const SHERIFF_PISTOL: ItemId = ItemId::new("Sheriff pistol");

    // Combat items
    pub const RAIN_DOH_BLUE_BALLS: ItemId = ItemId::new("Rain-Doh blue balls");
    pub const TIME_SPINNER: ItemId = ItemId::new("Time-Spinner");
    pub const RAIN_DOH_INDIGO_CUP: ItemId = ItemId::new("Rain-Doh indigo cup");
    pub const PORQUOISE_SIXGUN: ItemId = ItemId::new("porquoise-handled sixgun");
    pub const TRAIN_WHISTLE: ItemId = ItemId::new("train whistle");
    pub const LITTLE_RED_BOOK: ItemId = ItemId::new("little red book");
    pub const PRANK_CRIMBO_CARD: ItemId = ItemId::new("prank Crimbo card");
    pub const TRICK_COIN: ItemId = ItemId::new("trick coin");
    pub const SHADOW_BRICK: ItemId = ItemId::new("shadow brick");
    pub const REPLICA_BATOOMERANG: ItemId = ItemId::new("replica bat-oomerang");

    // Usables
    pub const CLARAS_BELL: ItemId = ItemId::new("Clara's bell");
    pub const PILL_KEEPER: ItemId = ItemId::new("Eight Days a Week Pill Keeper");
    pub const APRILING_TUBA: ItemId = ItemId::new("Apriling band tuba");

    // Access
    pub const CINCHO_DE_MAYO: ItemId = ItemId::new("Cincho de Mayo");
    pub const COSMIC_BOWLING_BALL: ItemId = ItemId::new("cosmic bowling ball");
    pub const CONTINUUM_TRANSFUNCTIONER: ItemId = ItemId::new("continuum transfunctioner");

    // Currencies
    pub const HOBO_NICKEL: ItemId = ItemId::new("hobo nickel");
    pub const SAND_DOLLAR: ItemId = ItemId::new("sand dollar");
    pub const FREDDY_KRUEGERAND: ItemId = ItemId::new("Freddy Kruegerand");
    pub const BEACH_BUCK: ItemId = ItemId::new("Beach Buck");
    pub const COINSPIRACY: ItemId = ItemId::new("Coinspiracy");
    pub const FUNFUNDS: ItemId = ItemId::new("FunFunds™");
    pub const VOLCOINO: ItemId = ItemId::new("Volcoino");
    pub const WALMART_GIFT_CERTIFICATE: ItemId = ItemId::new("Wal-Mart gift certificate");
    pub const RUBEE: ItemId = ItemId::new("Rubee™");
}

pub mod skills {
    use agent_core::SkillId;

    pub const CURSE_OF_WEAKSAUCE: SkillId = SkillId::new("Curse of Weaksauce");
    pub const SING_ALONG: SkillId = SkillId::new("Sing Along");
    pub const EXTRACT: SkillId = SkillId::new("Extract");
    pub const METEOR_LORE: SkillId = SkillId::new("Meteor Lore");
    pub const MICROMETEORITE: SkillId = SkillId::new("Micrometeorite");
    pub const POCKET_CRUMBS: SkillId = SkillId::new("Pocket Crumbs");
    pub const BOWL_SIDEWAYS: SkillId = SkillId::new("Bowl Sideways");
    pub const DIGITIZE: SkillId = SkillId::new("Digitize");
    pub const AMBIDEXTROUS_FUNKSLINGING: SkillId = SkillId::new("Ambidextrous Funkslinging");
    pub const OPEN_BIG_RED_PRESENT: SkillId = SkillId::new("Open a Big Red Present");
    pub const MEATIFY_MATTER: SkillId = SkillId::new("Meatify Matter");

    // Class finishers
    pub const NANTLERS: SkillId = SkillId::new("Nantlers");
    pub const NANOSHOCK: SkillId = SkillId::new("Nanoshock");
    pub const AUDIOCLASM: SkillId = SkillId::new("Audioclasm");
    pub const INFINITE_LOOP: SkillId = SkillId::new("Infinite Loop");
    pub const SAUCEGEYSER: SkillId = SkillId::new("Saucegeyser");
    pub const SHIELDBUTT: SkillId = SkillId::new("Shieldbutt");
    pub const LUNGING_THRUST_SMACK: SkillId = SkillId::new("Lunging Thrust-Smack");
    pub const KNEEBUTT: SkillId = SkillId::new("Kneebutt");

    // Proton pack
    pub const SHOOT_GHOST: SkillId = SkillId::new("Shoot Ghost");
    pub const TRAP_GHOST: SkillId = SkillId::new("Trap Ghost");

    // Free kills
    pub const TORSO_AWARENESS: SkillId = SkillId::new("Torso Awareness");
    pub const SPIT_JURASSIC_ACID: SkillId = SkillId::new("Spit jurassic acid");
    pub const FREE_FOR_ALL: SkillId = SkillId::new("Free-For-All");
    pub const SHOCKING_LICK: SkillId = SkillId::new("Shocking Lick");
    pub const FIRE_JOKESTERS_GUN: SkillId = SkillId::new("Fire the Jokester's Gun");
    pub const SHATTERING_PUNCH: SkillId = SkillId::new("Shattering Punch");
    pub const GINGERBREAD_MOB_HIT: SkillId = SkillId::new("Gingerbread Mob Hit");
    pub const CHEST_X_RAY: SkillId = SkillId::new("Chest X-Ray");
    pub const ASSERT_YOUR_AUTHORITY: SkillId = SkillId::new("Assert your Authority");

    // Free runs
    pub const ASDON_BUMPER: SkillId = SkillId::new("Asdon Martin: Spring-Loaded Front Bumper");
    pub const SPRING_AWAY: SkillId = SkillId::new("Spring Away");
    pub const BOWL_A_CURVEBALL: SkillId = SkillId::new("Bowl a Curveball");
    pub const EMOTIONALLY_CHIPPED: SkillId = SkillId::new("Emotionally Chipped");
    pub const FEEL_HATRED: SkillId = SkillId::new("Feel Hatred");
    pub const SNOKEBOMB: SkillId = SkillId::new("Snokebomb");
    pub const REFLEX_HAMMER: SkillId = SkillId::new("Reflex Hammer");

    // Noncombat forcers
    pub const FIESTA_EXIT: SkillId = SkillId::new("Cincho: Fiesta Exit");

    // Buffs
    pub const BLOOD_BOND: SkillId = SkillId::new("Blood Bond");
    pub const EMPATHY_OF_THE_NEWT: SkillId = SkillId::new("Empathy of the Newt");
    pub const LEASH_OF_LINGUINI: SkillId = SkillId::new("Leash of Linguini");
}

pub mod companions {
    use agent_core::CompanionId;

    pub const CRIMBO_SHRUB: CompanionId = CompanionId::new("Crimbo Shrub");
    pub const PEACE_TURKEY: CompanionId = CompanionId::new("Peace Turkey");
    pub const TEMPORAL_RIFTLET: CompanionId = CompanionId::new("Temporal Riftlet");
    pub const REAGNIMATED_GNOME: CompanionId = CompanionId::new("Reagnimated Gnome");
    pub const SHORTER_ORDER_COOK: CompanionId = CompanionId::new("Shorter-Order Cook");
    pub const STOCKING_MIMIC: CompanionId = CompanionId::new("Stocking Mimic");
    pub const GREY_GOOSE: CompanionId = CompanionId::new("Grey Goose");
    pub const JILL_OF_ALL_TRADES: CompanionId = CompanionId::new("Jill-of-All-Trades");
    pub const HOBO_MONKEY: CompanionId = CompanionId::new("Hobo Monkey");
    pub const COOKBOOKBAT: CompanionId = CompanionId::new("Cookbookbat");
}

pub mod effects {
    use agent_core::EffectId;

    pub const EVERYTHING_LOOKS_YELLOW: EffectId = EffectId::new("Everything Looks Yellow");
    pub const EVERYTHING_LOOKS_RED: EffectId = EffectId::new("Everything Looks Red");
    pub const EVERYTHING_LOOKS_GREEN: EffectId = EffectId::new("Everything Looks Green");
    pub const BLOOD_BOND: EffectId = EffectId::new("Blood Bond");
    pub const EMPATHY: EffectId = EffectId::new("Empathy");
    pub const LEASH_OF_LINGUINI: EffectId = EffectId::new("Leash of Linguini");
}

pub mod locations {
    use agent_core::LocationId;

    pub const NOOB_CAVE: LocationId = LocationId::new("Noob Cave");
    pub const DRUNKEN_STUPOR: LocationId = LocationId::new("Drunken Stupor");
    pub const HAUNTED_STORAGE_ROOM: LocationId = LocationId::new("The Haunted Storage Room");
    pub const ICY_PEAK: LocationId = LocationId::new("The Icy Peak");
    pub const CAFE: LocationId = LocationId::new("A Cafe Divided");
    pub const VANYAS_CASTLE: LocationId = LocationId::new("Vanya's Castle");
    pub const GINGERBREAD_CIVIC_CENTER: LocationId = LocationId::new("Gingerbread Civic Center");
    pub const SMOLDERING_ATOLL: LocationId = LocationId::new("The Smoldering Atoll");
    pub const FROZEN_REEF: LocationId = LocationId::new("The Frozen Reef");
    pub const FESTERING_GROVE: LocationId = LocationId::new("The Festering Grove");
}

pub mod monsters {
    use agent_core::MonsterId;

    pub const CRIMBUCCANEER_MUDLARK: MonsterId = MonsterId::new("Crimbuccaneer mudlark");
    pub const CRIMBUCCANEER_BOSUN: MonsterId = MonsterId::new("Crimbuccaneer bosun");
    pub const ELF_GUARD_ENGINEER: MonsterId = MonsterId::new("Elf Guard engineer");
    pub const SCORCHED_ELF: MonsterId = MonsterId::new("scorched elf");
    pub const FROSTBITTEN_KELP: MonsterId = MonsterId::new("frostbitten kelp");
    pub const ROTTING_MANGROVE: MonsterId = MonsterId::new("rotting mangrove");
    pub const SAUSAGE_GOBLIN: MonsterId = MonsterId::new("sausage goblin");

    pub const VOID_MONSTERS: [MonsterId; 3] = [
        MonsterId::new("void guy"),
        MonsterId::new("void slime"),
        MonsterId::new("void spider"),
    ];

    pub const VOTE_MONSTERS: [MonsterId; 5] = [
        MonsterId::new("angry ghost"),
        MonsterId::new("annoyed snake"),
        MonsterId::new("government bureaucrat"),
        MonsterId::new("slime blob"),
        MonsterId::new("terrible mutant"),
    ];
}

/// Zone name shared by every island location.
pub const HOLIDAY_ISLANDS: &str = "Holiday Islands";
