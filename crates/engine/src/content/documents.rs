use rpgmaestro_domain::Document;

/// The built-in historical document set.
pub fn sample_documents() -> Vec<Document> {
    vec![
        Document::new(
            "Medieval English Village Life",
            "In 13th century England, villages were typically centered around a church and manor house. Most villagers were serfs who worked the lord's land in exchange for protection and the right to farm small plots for themselves. Daily life revolved around agricultural work, with different tasks depending on the season. Village communities were close-knit, with social gatherings often occurring after church services on Sundays.",
            ["England", "village", "daily life", "13th century"],
            "England",
        ),
        Document::new(
            "Medieval Church and Religion",
            "The church was the center of medieval life, both spiritually and socially. Church bells marked the hours of the day and called people to prayer. Priests were often the most educated people in a village and served as advisors and record-keepers. Most people were deeply religious, believing firmly in heaven, hell, and the power of saints to intercede on their behalf. Churches often contained relics believed to have healing powers.",
            ["religion", "church", "priest", "medieval"],
            "Europe",
        ),
        Document::new(
            "Medieval Taverns and Alehouses",
            "Taverns in medieval England served as important social hubs where people gathered to drink, share news, and find lodging. Ale was the common drink, as water was often unsafe. Tavern keepers were licensed by local authorities and had to follow regulations about prices and measures. Travelers often sought out taverns for accommodation, though they might have to share beds with strangers. Gambling, storytelling, and music were common tavern entertainments.",
            ["tavern", "ale", "social", "England", "medieval"],
            "England",
        ),
        Document::new(
            "Medieval Forests and Wilderness",
            "Forests in medieval England were not simply wild areas but legally designated regions subject to forest law, which preserved hunting rights for the nobility. Commoners could be severely punished for poaching. However, forests provided essential resources: wood for fuel and building, herbs for medicine, honey from wild bees, and forage for pigs. Outlaws sometimes lived in forests, giving rise to legends like Robin Hood. Travelers feared forests as places of danger and mystery.",
            ["forest", "wilderness", "medieval", "England"],
            "England",
        ),
        Document::new(
            "Village Elders and Governance",
            "In medieval English villages, elders were respected community members who helped resolve disputes and maintain local customs. While the lord's steward had official authority, village elders often had significant informal influence. Many served on manorial courts that handled minor offenses and land disputes. Village elders were typically older men who had demonstrated wisdom and fairness throughout their lives. Some were also skilled in traditional medicine, using herbs and folk remedies to treat common ailments.",
            ["elder", "governance", "village", "medieval", "England"],
            "England",
        ),
        Document::new(
            "Medieval Knights and Chivalry",
            "Knights in 13th century England were mounted warriors who served a lord in exchange for land (fiefs). The code of chivalry governed knightly behavior, emphasizing courage, loyalty, and protection of the weak. Knights underwent years of training, starting as pages around age 7, then becoming squires before being knighted. A knight's armor and weapons were extremely expensive, often costing the equivalent of several years' income from a manor. Tournaments allowed knights to practice combat skills and gain reputation.",
            ["knight", "chivalry", "medieval", "England", "13th century"],
            "England",
        ),
    ]
}
