//! Built-in knowledge tables.
//!
//! Declaration order matters: the fuzzy resolver keeps the first of several
//! equally long candidates.

use super::KnowledgeBase;

pub(super) fn knowledge_base() -> KnowledgeBase {
    KnowledgeBase {
        book_details: table! {
            "1984" => book! {
                title: "1984",
                author: "George Orwell",
                published: 1949,
                pages: 328,
                description: "A dystopian novel about Winston Smith, a clerk in a totalitarian state where Big Brother watches everyone and the Party rewrites history.",
                long_description: "Orwell wrote 1984 in post-war London after witnessing fascism and Stalinism first hand. The novel follows Winston Smith, who works at the Ministry of Truth altering records, as he drifts into quiet rebellion against a regime that controls language, memory and thought. It is a study of how systems built to educate and discipline can destroy individual and collective identity, and it remains one of the most quoted political novels ever written.",
            },
            "war and peace" => book! {
                title: "War and Peace",
                author: "Leo Tolstoy",
                published: 1869,
                pages: 1225,
                description: "An epic of Russian society during Napoleon's invasion of 1812, told through the lives of aristocratic families.",
                long_description: "War and Peace follows Pierre Bezukhov, the illegitimate heir searching for meaning; Prince Andrei Bolkonsky, who leaves his family to fight Napoleon; and Natasha Rostova, the young noblewoman who captivates them both. Tolstoy moves between ballrooms and battlefields, peasants and emperors, and lets his characters outgrow their era to become some of the most human figures in world literature.",
            },
            "pride and prejudice" => book! {
                title: "Pride and Prejudice",
                author: "Jane Austen",
                published: 1813,
                pages: 279,
                description: "Elizabeth Bennet and the proud Mr. Darcy misjudge each other in a comedy of manners about marriage, money and class.",
                long_description: "It is a truth universally acknowledged that a single man in possession of a good fortune must be in want of a wife. When the wealthy Mr. Bingley and his prouder friend Mr. Darcy arrive near the Bennet household, Mrs. Bennet sees a chance to marry off her daughters. Elizabeth's quick judgement and Darcy's reserve set up the novel's central misunderstanding, while a cast of clergymen, aunts and officers exposes the economics beneath Regency courtship.",
            },
            "the hunger games" => book! {
                title: "The Hunger Games",
                author: "Suzanne Collins",
                published: 2008,
                pages: 374,
                description: "In the nation of Panem, Katniss Everdeen volunteers to take her sister's place in a televised fight to the death.",
            },
            "lord of the rings" => book! {
                title: "The Lord of the Rings",
                author: "J.R.R. Tolkien",
                published: 1954,
                pages: 1178,
                description: "Frodo Baggins and the Fellowship set out to destroy the One Ring before the Dark Lord Sauron can reclaim it.",
            },
            "to kill a mockingbird" => book! {
                title: "To Kill a Mockingbird",
                author: "Harper Lee",
                published: 1960,
                pages: 281,
                description: "Scout Finch grows up in the Deep South while her father, a lawyer, defends a Black man falsely accused of a crime.",
            },
            "the great gatsby" => book! {
                title: "The Great Gatsby",
                author: "F. Scott Fitzgerald",
                published: 1925,
                pages: 180,
                description: "The mysterious millionaire Jay Gatsby pursues Daisy Buchanan amid the lavish parties of Jazz Age Long Island.",
            },
            "little women" => book! {
                title: "Little Women",
                author: "Louisa May Alcott",
                published: 1868,
                pages: 759,
                description: "Four sisters come of age in Civil War era New England in a story first written for children and loved by readers of all ages.",
            },
            "vampire academy" => book! {
                title: "Vampire Academy",
                author: "Richelle Mead",
                published: 2007,
                pages: 332,
                description: "Rose Hathaway, half human and half vampire, guards her best friend Lissa, a Moroi princess, at a hidden academy for vampire royalty.",
            },
            "heart of darkness" => book! {
                title: "Heart of Darkness",
                author: "Joseph Conrad",
                published: 1899,
                pages: 96,
                description: "A narrator's journey up the Congo River to meet the enigmatic ivory trader Mr. Kurtz.",
            },
        },

        author_recommendations: table! {
            "louisa may alcott" => titles!["Little Women", "Good Wives", "Jo's Boys"],
            "margaret atwood" => titles!["The Handmaid's Tale", "Oryx and Crake", "Alias Grace"],
            "ernest hemingway" => titles!["The Old Man and the Sea", "A Farewell to Arms", "For Whom the Bell Tolls"],
            "agatha christie" => titles!["Murder on the Orient Express", "And Then There Were None", "The Mysterious Affair at Styles"],
            "neil gaiman" => titles!["American Gods", "Coraline", "Neverwhere", "The Graveyard Book"],
            "john grisham" => titles!["The Firm", "A Time to Kill", "The Pelican Brief"],
            "orson scott card" => titles!["Ender's Game", "Speaker for the Dead", "Xenocide"],
            "jane austen" => titles!["Pride and Prejudice", "Sense and Sensibility", "Emma"],
        },

        genre_recommendations: table! {
            "science fiction" => titles!["Dune", "Ender's Game", "Foundation"],
            "fantasy" => titles!["The Hobbit", "A Game of Thrones", "The Name of the Wind"],
            "mystery" => titles!["Gone Girl", "The Girl with the Dragon Tattoo", "In the Woods"],
            "romance" => titles!["Pride and Prejudice", "Me Before You", "The Notebook"],
            "historical fiction" => titles!["The Book Thief", "War and Peace", "All the Light We Cannot See"],
            "non-fiction" => titles!["Sapiens", "Educated", "The Immortal Life of Henrietta Lacks"],
            "thriller" => titles!["The Da Vinci Code", "The Silence of the Lambs", "Misery"],
            "young adult" => titles!["The Hunger Games", "Divergent", "The Fault in Our Stars"],
            "horror" => titles!["The Shining", "It", "House of Leaves"],
            "self-help" => titles!["The 7 Habits of Highly Effective People", "How to Win Friends & Influence People"],
        },

        similar_books: table! {
            "game of thrones" => titles!["The Name of the Wind", "The Way of Kings", "The Wheel of Time"],
            "pride and prejudice" => titles!["Sense and Sensibility", "Emma", "Wuthering Heights"],
            "to kill a mockingbird" => titles!["The Help", "A Time to Kill", "Go Set a Watchman"],
            "1984" => titles!["Brave New World", "Fahrenheit 451", "We"],
            "the great gatsby" => titles!["This Side of Paradise", "The Sun Also Rises", "The Age of Innocence"],
            "lord of the rings" => titles!["The Silmarillion", "Wheel of Time", "Mistborn"],
            "jane eyre" => titles!["Wuthering Heights", "Rebecca", "North and South"],
            "the hunger games" => titles!["Divergent", "Battle Royale", "The Maze Runner"],
        },

        top_rated_by_genre: table! {
            "science fiction" => titles!["Dune", "Neuromancer", "Ender's Game"],
            "fantasy" => titles!["The Lord of the Rings", "A Song of Ice and Fire", "The Name of the Wind"],
            "mystery" => titles!["The Girl with the Dragon Tattoo", "Gone Girl", "Big Little Lies"],
            "romance" => titles!["Pride and Prejudice", "Outlander", "Jane Eyre"],
            "non-fiction" => titles!["Sapiens", "Educated", "Hiroshima"],
            "horror" => titles!["Dracula", "Frankenstein", "The Haunting of Hill House"],
        },

        top_rated_general: titles!["To Kill a Mockingbird", "1984", "The Great Gatsby", "The Catcher in the Rye"],

        // Note the "nonfiction" spelling: these two tables predate the
        // hyphenated genre keys and are matched exactly.
        short_highly_rated: table! {
            "romance" => titles!["Breakfast at Tiffany's (Novella)", "The Princess Bride (relatively short)"],
            "fantasy" => titles!["The Ocean at the End of the Lane", "Coraline"],
            "horror" => titles!["Carmilla", "We Have Always Lived in the Castle"],
            "mystery" => titles!["The Big Sleep", "The Hound of the Baskervilles"],
            "nonfiction" => titles!["Man's Search for Meaning", "The Art of War"],
        },

        long_highly_rated: table! {
            "fantasy" => titles!["The Way of Kings", "The Eye of the World"],
            "romance" => titles!["Gone with the Wind", "Outlander"],
            "horror" => titles!["IT by Stephen King", "The Stand"],
            "mystery" => titles!["The Girl with the Dragon Tattoo", "Lonesome Dove (more western)"],
            "nonfiction" => titles!["Team of Rivals", "The Power Broker"],
        },
    }
}
