//! Per-language calendar title formats.
//!
//! Each entry is a codec descriptor; see [`crate::codec`] for the building
//! blocks. Not every language has every kind.

use std::collections::BTreeMap;

use crate::codec::{
    Codec, DecodeFailure, decade_span, decade_span_descending, decade_start, first, next, param,
    previous, second,
};
use crate::kind::FormatKind;
use crate::month::Month;
use crate::text::{first_lower, first_upper};

pub type LanguageTable = BTreeMap<&'static str, Codec>;
pub type FormatTable = BTreeMap<FormatKind, LanguageTable>;

const MONTH_NAMES: &[(&str, [&str; 12])] = &[
    ("af", ["Januarie", "Februarie", "Maart", "April", "Mei", "Junie", "Julie", "Augustus", "September", "Oktober", "November", "Desember"]),
    ("als", ["Januar", "Februar", "März", "April", "Mai", "Juni", "Juli", "August", "September", "Oktober", "November", "Dezember"]),
    ("an", ["chinero", "febrero", "marzo", "abril", "mayo", "chunio", "chulio", "agosto", "setiembre", "otubre", "nobiembre", "abiento"]),
    ("ang", ["Æfterra Geola", "Solmonaþ", "Hreþmonaþ", "Eastermonaþ", "Þrimilcemonaþ", "Ærra Liþa", "Æfterra Liþa", "Weodmonaþ", "Haligmonaþ", "Winterfylleþ", "Blotmonaþ", "Ærra Geola"]),
    ("ar", ["يناير", "فبراير", "مارس", "أبريل", "مايو", "يونيو", "يوليو", "أغسطس", "سبتمبر", "أكتوبر", "نوفمبر", "ديسمبر"]),
    ("ast", ["xineru", "febreru", "marzu", "abril", "mayu", "xunu", "xunetu", "agostu", "setiembre", "ochobre", "payares", "avientu"]),
    ("az", ["yanvar", "fevral", "mart", "aprel", "may", "iyun", "iyul", "avqust", "sentyabr", "oktyabr", "noyabr", "dekabr"]),
    ("be", ["студзень", "люты", "сакавік", "красавік", "травень", "чэрвень", "ліпень", "жнівень", "верасень", "кастрычнік", "лістапад", "снежань"]),
    ("bg", ["януари", "февруари", "март", "април", "май", "юни", "юли", "август", "септември", "октомври", "ноември", "декември"]),
    ("bn", ["জানুয়ারি", "ফেব্রুয়ারি", "মার্চ", "এপ্রিল", "মে", "জুন", "জুলাই", "আগস্ট", "সেপ্টেম্বর", "অক্টোবর", "নভেম্বর", "ডিসেম্বর"]),
    ("br", ["Genver", "C'hwevrer", "Meurzh", "Ebrel", "Mae", "Mezheven", "Gouere", "Eost", "Gwengolo", "Here", "Du", "Kerzu"]),
    ("bs", ["januar", "februar", "mart", "april", "maj", "juni", "juli", "august", "septembar", "oktobar", "novembar", "decembar"]),
    ("ca", ["gener", "febrer", "març", "abril", "maig", "juny", "juliol", "agost", "setembre", "octubre", "novembre", "desembre"]),
    ("ceb", ["Enero", "Pebrero", "Marso", "Abril", "Mayo", "Hunyo", "Hulyo", "Agosto", "Septiyembre", "Oktubre", "Nobiyembre", "Disyembre"]),
    ("cs", ["leden", "únor", "březen", "duben", "květen", "červen", "červenec", "srpen", "září", "říjen", "listopad", "prosinec"]),
    ("csb", ["stëcznik", "gromicznik", "strumiannik", "łżëkwiôt", "môj", "czerwińc", "lëpinc", "zélnik", "séwnik", "rujan", "lëstopadnik", "gòdnik"]),
    ("cv", ["кăрлач", "нарăс", "пуш", "ака", "çу", "çĕртме", "утă", "çурла", "авăн", "юпа", "чӳк", "раштав"]),
    ("cy", ["Ionawr", "Chwefror", "Mawrth", "Ebrill", "Mai", "Mehefin", "Gorffennaf", "Awst", "Medi", "Hydref", "Tachwedd", "Rhagfyr"]),
    ("da", ["januar", "februar", "marts", "april", "maj", "juni", "juli", "august", "september", "oktober", "november", "december"]),
    ("de", ["Januar", "Februar", "März", "April", "Mai", "Juni", "Juli", "August", "September", "Oktober", "November", "Dezember"]),
    ("el", ["Ιανουάριος", "Φεβρουάριος", "Μάρτιος", "Απρίλιος", "Μάιος", "Ιούνιος", "Ιούλιος", "Αύγουστος", "Σεπτέμβριος", "Οκτώβριος", "Νοέμβριος", "Δεκέμβριος"]),
    ("en", ["January", "February", "March", "April", "May", "June", "July", "August", "September", "October", "November", "December"]),
    ("eo", ["januaro", "februaro", "marto", "aprilo", "majo", "junio", "julio", "aŭgusto", "septembro", "oktobro", "novembro", "decembro"]),
    ("es", ["enero", "febrero", "marzo", "abril", "mayo", "junio", "julio", "agosto", "septiembre", "octubre", "noviembre", "diciembre"]),
    ("et", ["jaanuar", "veebruar", "märts", "aprill", "mai", "juuni", "juuli", "august", "september", "oktoober", "november", "detsember"]),
    ("eu", ["urtarril", "otsail", "martxo", "apiril", "maiatz", "ekain", "uztail", "abuztu", "irail", "urri", "azaro", "abendu"]),
    ("fa", ["ژانویه", "فوریه", "مارس", "آوریل", "مه", "ژوئن", "ژوئیه", "اوت", "سپتامبر", "اکتبر", "نوامبر", "دسامبر"]),
    ("fi", ["tammikuu", "helmikuu", "maaliskuu", "huhtikuu", "toukokuu", "kesäkuu", "heinäkuu", "elokuu", "syyskuu", "lokakuu", "marraskuu", "joulukuu"]),
    ("fo", ["januar", "februar", "mars", "apríl", "mai", "juni", "juli", "august", "september", "oktober", "november", "desember"]),
    ("fr", ["janvier", "février", "mars", "avril", "mai", "juin", "juillet", "août", "septembre", "octobre", "novembre", "décembre"]),
    ("fy", ["jannewaris", "febrewaris", "maart", "april", "maaie", "juny", "july", "augustus", "septimber", "oktober", "novimber", "desimber"]),
    ("ga", ["Eanáir", "Feabhra", "Márta", "Aibreán", "Bealtaine", "Meitheamh", "Iúil", "Lúnasa", "Meán Fómhair", "Deireadh Fómhair", "Samhain", "Nollaig"]),
    ("gl", ["xaneiro", "febreiro", "marzo", "abril", "maio", "xuño", "xullo", "agosto", "setembro", "outubro", "novembro", "decembro"]),
    ("gu", ["જાન્યુઆરી", "ફેબ્રુઆરી", "માર્ચ", "એપ્રિલ", "મે", "જૂન", "જુલાઇ", "ઓગસ્ટ", "સપ્ટેમ્બર", "ઓક્ટોબર", "નવેમ્બર", "ડિસેમ્બર"]),
    ("he", ["ינואר", "פברואר", "מרץ", "אפריל", "מאי", "יוני", "יולי", "אוגוסט", "ספטמבר", "אוקטובר", "נובמבר", "דצמבר"]),
    ("hi", ["जनवरी", "फ़रवरी", "मार्च", "अप्रैल", "मई", "जून", "जुलाई", "अगस्त", "सितम्बर", "अक्टूबर", "नवम्बर", "दिसम्बर"]),
    ("hr", ["siječanj", "veljača", "ožujak", "travanj", "svibanj", "lipanj", "srpanj", "kolovoz", "rujan", "listopad", "studeni", "prosinac"]),
    ("hu", ["január", "február", "március", "április", "május", "június", "július", "augusztus", "szeptember", "október", "november", "december"]),
    ("hy", ["Հունվար", "Փետրվար", "Մարտ", "Ապրիլ", "Մայիս", "Հունիս", "Հուլիս", "Օգոստոս", "Սեպտեմբեր", "Հոկտեմբեր", "Նոյեմբեր", "Դեկտեմբեր"]),
    ("ia", ["januario", "februario", "martio", "april", "maio", "junio", "julio", "augusto", "septembre", "octobre", "novembre", "decembre"]),
    ("id", ["Januari", "Februari", "Maret", "April", "Mei", "Juni", "Juli", "Agustus", "September", "Oktober", "November", "Desember"]),
    ("ie", ["januar", "februar", "marte", "april", "may", "junio", "julí", "august", "septembre", "octobre", "novembre", "decembre"]),
    ("io", ["januaro", "februaro", "marto", "aprilo", "mayo", "junio", "julio", "agosto", "septembro", "oktobro", "novembro", "decembro"]),
    ("is", ["janúar", "febrúar", "mars", "apríl", "maí", "júní", "júlí", "ágúst", "september", "október", "nóvember", "desember"]),
    ("it", ["gennaio", "febbraio", "marzo", "aprile", "maggio", "giugno", "luglio", "agosto", "settembre", "ottobre", "novembre", "dicembre"]),
    ("jv", ["Januari", "Februari", "Maret", "April", "Mei", "Juni", "Juli", "Agustus", "September", "Oktober", "November", "Desember"]),
    ("ka", ["იანვარი", "თებერვალი", "მარტი", "აპრილი", "მაისი", "ივნისი", "ივლისი", "აგვისტო", "სექტემბერი", "ოქტომბერი", "ნოემბერი", "დეკემბერი"]),
    ("kk", ["Қаңтар", "Ақпан", "Наурыз", "Сәуір", "Мамыр", "Маусым", "Шілде", "Тамыз", "Қыркүйек", "Қазан", "Қараша", "Желтоқсан"]),
    ("kn", ["ಜನವರಿ", "ಫೆಬ್ರವರಿ", "ಮಾರ್ಚ್", "ಏಪ್ರಿಲ್", "ಮೇ", "ಜೂನ್", "ಜುಲೈ", "ಆಗಸ್ಟ್", "ಸೆಪ್ಟೆಂಬರ್", "ಅಕ್ಟೋಬರ್", "ನವೆಂಬರ್", "ಡಿಸೆಂಬರ್"]),
    ("ku", ["rêbendan", "reşemî", "adar", "avrêl", "gulan", "pûşper", "tîrmeh", "gelawêj", "rezber", "kewçêr", "sermawez", "berfanbar"]),
    ("kw", ["Genver", "Hwevrer", "Meurth", "Ebryl", "Me", "Metheven", "Gortheren", "Est", "Gwynngala", "Hedra", "Du", "Kevardhu"]),
    ("la", ["Ianuarius", "Februarius", "Martius", "Aprilis", "Maius", "Iunius", "Iulius", "Augustus", "September", "October", "November", "December"]),
    ("lb", ["Januar", "Februar", "Mäerz", "Abrëll", "Mee", "Juni", "Juli", "August", "September", "Oktober", "November", "Dezember"]),
    ("li", ["jannewarie", "fibberwarie", "miert", "april", "mei", "juni", "juli", "augustus", "september", "oktober", "november", "december"]),
    ("lt", ["sausis", "vasaris", "kovas", "balandis", "gegužė", "birželis", "liepa", "rugpjūtis", "rugsėjis", "spalis", "lapkritis", "gruodis"]),
    ("lv", ["janvāris", "februāris", "marts", "aprīlis", "maijs", "jūnijs", "jūlijs", "augusts", "septembris", "oktobris", "novembris", "decembris"]),
    ("mi", ["Kohi-tātea", "Hui-tanguru", "Poutū-te-rangi", "Paenga-whāwhā", "Haratua", "Pipiri", "Hōngongoi", "Here-turi-kōkā", "Mahuru", "Whiringa-ā-nuku", "Whiringa-ā-rangi", "Hakihea"]),
    ("mk", ["јануари", "февруари", "март", "април", "мај", "јуни", "јули", "август", "септември", "октомври", "ноември", "декември"]),
    ("ml", ["ജനുവരി", "ഫെബ്രുവരി", "മാർച്ച്", "ഏപ്രിൽ", "മേയ്", "ജൂൺ", "ജൂലൈ", "ഓഗസ്റ്റ്", "സെപ്റ്റംബർ", "ഒക്ടോബർ", "നവംബർ", "ഡിസംബർ"]),
    ("mr", ["जानेवारी", "फेब्रुवारी", "मार्च", "एप्रिल", "मे", "जून", "जुलै", "ऑगस्ट", "सप्टेंबर", "ऑक्टोबर", "नोव्हेंबर", "डिसेंबर"]),
    ("ms", ["Januari", "Februari", "Mac", "April", "Mei", "Jun", "Julai", "Ogos", "September", "Oktober", "November", "Disember"]),
    ("nap", ["jennaro", "frevaro", "màrzo", "abbrile", "maggio", "giùgno", "luglio", "aùsto", "settembre", "ottovre", "nuvembre", "dicembre"]),
    ("nds", ["Januar", "Februar", "März", "April", "Mai", "Juni", "Juli", "August", "September", "Oktober", "November", "Dezember"]),
    ("nl", ["januari", "februari", "maart", "april", "mei", "juni", "juli", "augustus", "september", "oktober", "november", "december"]),
    ("nn", ["januar", "februar", "mars", "april", "mai", "juni", "juli", "august", "september", "oktober", "november", "desember"]),
    ("no", ["januar", "februar", "mars", "april", "mai", "juni", "juli", "august", "september", "oktober", "november", "desember"]),
    ("oc", ["genièr", "febrièr", "març", "abril", "mai", "junh", "julh", "agost", "setembre", "octobre", "novembre", "decembre"]),
    ("os", ["январь", "февраль", "мартъи", "апрель", "май", "июнь", "июль", "август", "сентябрь", "октябрь", "ноябрь", "декабрь"]),
    ("pl", ["styczeń", "luty", "marzec", "kwiecień", "maj", "czerwiec", "lipiec", "sierpień", "wrzesień", "październik", "listopad", "grudzień"]),
    ("pt", ["janeiro", "fevereiro", "março", "abril", "maio", "junho", "julho", "agosto", "setembro", "outubro", "novembro", "dezembro"]),
    ("ro", ["ianuarie", "februarie", "martie", "aprilie", "mai", "iunie", "iulie", "august", "septembrie", "octombrie", "noiembrie", "decembrie"]),
    ("ru", ["январь", "февраль", "март", "апрель", "май", "июнь", "июль", "август", "сентябрь", "октябрь", "ноябрь", "декабрь"]),
    ("scn", ["jinnaru", "frivaru", "marzu", "aprili", "maju", "giugnu", "giugnettu", "austu", "sittèmmiru", "uttùviru", "nuvèmmiru", "dicèmmiru"]),
    ("se", ["ođđajagemánnu", "guovvamánnu", "njukčamánnu", "cuoŋománnu", "miessemánnu", "geassemánnu", "suoidnemánnu", "borgemánnu", "čakčamánnu", "golggotmánnu", "skábmamánnu", "juovlamánnu"]),
    ("simple", ["January", "February", "March", "April", "May", "June", "July", "August", "September", "October", "November", "December"]),
    ("sk", ["január", "február", "marec", "apríl", "máj", "jún", "júl", "august", "september", "október", "november", "december"]),
    ("sl", ["januar", "februar", "marec", "april", "maj", "junij", "julij", "avgust", "september", "oktober", "november", "december"]),
    ("sq", ["Janar", "Shkurt", "Mars", "Prill", "Maj", "Qershor", "Korrik", "Gusht", "Shtator", "Tetor", "Nëntor", "Dhjetor"]),
    ("sr", ["јануар", "фебруар", "март", "април", "мај", "јун", "јул", "август", "септембар", "октобар", "новембар", "децембар"]),
    ("sv", ["januari", "februari", "mars", "april", "maj", "juni", "juli", "augusti", "september", "oktober", "november", "december"]),
    ("sw", ["Januari", "Februari", "Machi", "Aprili", "Mei", "Juni", "Julai", "Agosti", "Septemba", "Oktoba", "Novemba", "Desemba"]),
    ("ta", ["ஜனவரி", "பிப்ரவரி", "மார்ச்", "ஏப்ரல்", "மே", "ஜூன்", "ஜூலை", "ஆகஸ்ட்", "செப்டம்பர்", "அக்டோபர்", "நவம்பர்", "டிசம்பர்"]),
    ("te", ["జనవరి", "ఫిబ్రవరి", "మార్చి", "ఏప్రిల్", "మే", "జూన్", "జూలై", "ఆగష్టు", "సెప్టెంబర్", "అక్టోబర్", "నవంబర్", "డిసెంబర్"]),
    ("th", ["มกราคม", "กุมภาพันธ์", "มีนาคม", "เมษายน", "พฤษภาคม", "มิถุนายน", "กรกฎาคม", "สิงหาคม", "กันยายน", "ตุลาคม", "พฤศจิกายน", "ธันวาคม"]),
    ("tl", ["Enero", "Pebrero", "Marso", "Abril", "Mayo", "Hunyo", "Hulyo", "Agosto", "Setyembre", "Oktubre", "Nobyembre", "Disyembre"]),
    ("tr", ["Ocak", "Şubat", "Mart", "Nisan", "Mayıs", "Haziran", "Temmuz", "Ağustos", "Eylül", "Ekim", "Kasım", "Aralık"]),
    ("uk", ["січень", "лютий", "березень", "квітень", "травень", "червень", "липень", "серпень", "вересень", "жовтень", "листопад", "грудень"]),
    ("ur", ["جنوری", "فروری", "مارچ", "اپریل", "مئی", "جون", "جولائی", "اگست", "ستمبر", "اکتوبر", "نومبر", "دسمبر"]),
    ("vo", ["yanul", "febul", "mäzul", "prilul", "mayul", "yunul", "yulul", "gustul", "setul", "tobul", "novul", "dekul"]),
    ("wa", ["djanvî", "fevrî", "måss", "avri", "may", "djun", "djulete", "awousse", "setimbe", "octôbe", "nôvimbe", "decimbe"]),
    ("yi", ["יאנואר", "פעברואר", "מערץ", "אפריל", "מיי", "יוני", "יולי", "אויגוסט", "סעפטעמבער", "אקטאבער", "נאוועמבער", "דעצעמבער"]),
];

/// Languages whose month names are the month number plus a counter word.
const NUMBERED_MONTHS: &[(&str, &str)] = &[
    ("ja", "{number}月"),
    ("ko", "{number}월"),
    ("vi", "tháng {number}"),
    ("zh", "{number}月"),
    ("zh-min-nan", "{number}-goe̍h"),
];

/// Day titles that need a declined month name rather than the plain one.
const DECLINED_DAY_PATTERNS: &[(&str, [&str; 12])] = &[
    ("ca", ["%d de gener", "%d de febrer", "%d de març", "%d d'abril", "%d de maig", "%d de juny", "%d de juliol", "%d d'agost", "%d de setembre", "%d d'octubre", "%d de novembre", "%d de desembre"]),
    ("fi", ["%d. tammikuuta", "%d. helmikuuta", "%d. maaliskuuta", "%d. huhtikuuta", "%d. toukokuuta", "%d. kesäkuuta", "%d. heinäkuuta", "%d. elokuuta", "%d. syyskuuta", "%d. lokakuuta", "%d. marraskuuta", "%d. joulukuuta"]),
    ("pl", ["%d stycznia", "%d lutego", "%d marca", "%d kwietnia", "%d maja", "%d czerwca", "%d lipca", "%d sierpnia", "%d września", "%d października", "%d listopada", "%d grudnia"]),
    ("ru", ["%d января", "%d февраля", "%d марта", "%d апреля", "%d мая", "%d июня", "%d июля", "%d августа", "%d сентября", "%d октября", "%d ноября", "%d декабря"]),
    ("uk", ["%d січня", "%d лютого", "%d березня", "%d квітня", "%d травня", "%d червня", "%d липня", "%d серпня", "%d вересня", "%d жовтня", "%d листопада", "%d грудня"]),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LetterCase {
    AsIs,
    Upper,
    Lower,
}

/// Day titles built from a template around the month name.
const NAMED_DAY_PATTERNS: &[(&str, &str, LetterCase)] = &[
    ("af", "%d {month}", LetterCase::AsIs),
    ("als", "%d. {month}", LetterCase::AsIs),
    ("an", "%d de {month}", LetterCase::AsIs),
    ("ar", "%d {month}", LetterCase::AsIs),
    ("ast", "%d de {month}", LetterCase::AsIs),
    ("az", "%d {month}", LetterCase::AsIs),
    ("bg", "%d {month}", LetterCase::AsIs),
    ("bn", "%B {month}", LetterCase::AsIs),
    ("br", "%d {month}", LetterCase::AsIs),
    ("bs", "%d. {month}", LetterCase::AsIs),
    ("ceb", "{month} %d", LetterCase::AsIs),
    ("cs", "%d. {month}", LetterCase::AsIs),
    ("cy", "%d {month}", LetterCase::AsIs),
    ("da", "%d. {month}", LetterCase::AsIs),
    ("de", "%d. {month}", LetterCase::AsIs),
    ("en", "{month} %d", LetterCase::AsIs),
    ("eo", "%d-a de {month}", LetterCase::AsIs),
    ("es", "%d de {month}", LetterCase::AsIs),
    ("et", "%d. {month}", LetterCase::AsIs),
    ("fa", "%d {month}", LetterCase::AsIs),
    ("fo", "%d. {month}", LetterCase::AsIs),
    ("fy", "%d {month}", LetterCase::AsIs),
    ("ga", "%d {month}", LetterCase::AsIs),
    ("gl", "%d de {month}", LetterCase::AsIs),
    ("he", "%d ב{month}", LetterCase::AsIs),
    ("hi", "%d {month}", LetterCase::AsIs),
    ("hu", "{month} %d.", LetterCase::Upper),
    ("ia", "%d de {month}", LetterCase::AsIs),
    ("id", "%d {month}", LetterCase::AsIs),
    ("ie", "%d {month}", LetterCase::AsIs),
    ("io", "%d di {month}", LetterCase::AsIs),
    ("is", "%d. {month}", LetterCase::AsIs),
    ("it", "%d {month}", LetterCase::AsIs),
    ("ja", "{number}月%d日", LetterCase::AsIs),
    ("jv", "%d {month}", LetterCase::AsIs),
    ("ka", "%d {month}", LetterCase::AsIs),
    ("ko", "{number}월 %d일", LetterCase::AsIs),
    ("ku", "%d {month}", LetterCase::AsIs),
    ("lb", "%d. {month}", LetterCase::AsIs),
    ("li", "%d {month}", LetterCase::AsIs),
    ("lv", "%d. {month}", LetterCase::AsIs),
    ("mk", "%d {month}", LetterCase::AsIs),
    ("ml", "{month} %d", LetterCase::AsIs),
    ("mr", "%d {month}", LetterCase::AsIs),
    ("ms", "%d {month}", LetterCase::AsIs),
    ("nds", "%d. {month}", LetterCase::AsIs),
    ("nl", "%d {month}", LetterCase::AsIs),
    ("nn", "%d. {month}", LetterCase::AsIs),
    ("no", "%d. {month}", LetterCase::AsIs),
    ("oc", "%d de {month}", LetterCase::AsIs),
    ("pt", "%d de {month}", LetterCase::AsIs),
    ("ro", "%d {month}", LetterCase::AsIs),
    ("scn", "%d di {month}", LetterCase::AsIs),
    ("simple", "{month} %d", LetterCase::AsIs),
    ("sk", "%d. {month}", LetterCase::AsIs),
    ("sl", "%d. {month}", LetterCase::AsIs),
    ("sq", "%d {month}", LetterCase::AsIs),
    ("sr", "%d. {month}", LetterCase::AsIs),
    ("sv", "%d {month}", LetterCase::AsIs),
    ("sw", "%d {month}", LetterCase::AsIs),
    ("ta", "{month} %d", LetterCase::AsIs),
    ("te", "{month} %d", LetterCase::AsIs),
    ("th", "%d {month}", LetterCase::AsIs),
    ("tl", "{month} %d", LetterCase::AsIs),
    ("tr", "%d {month}", LetterCase::AsIs),
    ("ur", "%d {month}", LetterCase::AsIs),
    ("vi", "%d {month}", LetterCase::AsIs),
    ("wa", "%d di {month}", LetterCase::AsIs),
    ("zh", "{number}月%d日", LetterCase::AsIs),
    ("zh-min-nan", "{number}-goe̍h %d-ji̍t", LetterCase::AsIs),
];

const MONTH_OF_YEAR_PATTERNS: &[(&str, &str, LetterCase)] = &[
    ("af", "{month} %d", LetterCase::AsIs),
    ("ar", "{month} %d", LetterCase::AsIs),
    ("bg", "{month} %d", LetterCase::Upper),
    ("ca", "{month} de %d", LetterCase::Upper),
    ("cs", "{month} %d", LetterCase::Upper),
    ("da", "{month} %d", LetterCase::Upper),
    ("de", "{month} %d", LetterCase::AsIs),
    ("en", "{month} %d", LetterCase::AsIs),
    ("eo", "{month} %d", LetterCase::Upper),
    ("es", "{month} de %d", LetterCase::Upper),
    ("et", "{month} %d", LetterCase::Upper),
    ("fi", "{month} %d", LetterCase::Upper),
    ("fr", "{month} %d", LetterCase::Upper),
    ("hu", "%d. {month}", LetterCase::Lower),
    ("id", "{month} %d", LetterCase::AsIs),
    ("is", "{month} %d", LetterCase::Upper),
    ("it", "{month} %d", LetterCase::Upper),
    ("ja", "%d年{number}月", LetterCase::AsIs),
    ("ko", "%d년 {number}월", LetterCase::AsIs),
    ("nl", "{month} %d", LetterCase::Upper),
    ("no", "{month} %d", LetterCase::Upper),
    ("pl", "{month} %d", LetterCase::Upper),
    ("pt", "{month} de %d", LetterCase::Upper),
    ("ro", "{month} %d", LetterCase::Upper),
    ("ru", "{month} %d", LetterCase::Upper),
    ("simple", "{month} %d", LetterCase::AsIs),
    ("sk", "{month} %d", LetterCase::Upper),
    ("sl", "{month} %d", LetterCase::Upper),
    ("sq", "{month} %d", LetterCase::AsIs),
    ("sr", "{month} %d", LetterCase::Upper),
    ("sv", "{month} %d", LetterCase::Upper),
    ("tr", "{month} %d", LetterCase::AsIs),
    ("uk", "{month} %d", LetterCase::Upper),
    ("vi", "{month} năm %d", LetterCase::Upper),
    ("zh", "%d年{number}月", LetterCase::AsIs),
];

pub fn build_table() -> FormatTable {
    let mut table = FormatTable::new();
    add_month_names(&mut table);
    add_numbers(&mut table);
    add_years(&mut table);
    add_decades(&mut table);
    add_centuries(&mut table);
    add_millennia(&mut table);
    add_categories(&mut table);
    add_current_events(&mut table);
    add_days_of_month(&mut table);
    add_months_of_year(&mut table);
    table
}

fn insert(table: &mut FormatTable, kind: FormatKind, lang: &'static str, codec: Codec) {
    table.entry(kind).or_default().insert(lang, codec);
}

fn simple(kind: FormatKind, pattern: &str) -> Codec {
    Codec::no_conv(pattern, kind.limit())
}

fn add_simple(table: &mut FormatTable, kind: FormatKind, entries: &[(&'static str, &str)]) {
    for (lang, pattern) in entries {
        insert(table, kind, *lang, simple(kind, pattern));
    }
}

fn is_zero(value: i64) -> bool {
    value == 0
}

fn not_zero(value: i64) -> bool {
    value != 0
}

fn is_one(value: i64) -> bool {
    value == 1
}

fn not_one(value: i64) -> bool {
    value != 1
}

fn ordinal_st(value: i64) -> bool {
    value == 1 || (value > 20 && value % 10 == 1)
}

fn ordinal_nd(value: i64) -> bool {
    value == 2 || (value > 20 && value % 10 == 2)
}

fn ordinal_rd(value: i64) -> bool {
    value == 3 || (value > 20 && value % 10 == 3)
}

fn ordinal_th(value: i64) -> bool {
    !(ordinal_st(value) || ordinal_nd(value) || ordinal_rd(value))
}

/// `1st`, `2nd`, `3rd`, `4th` ... `11th`, `21st` followed by `noun`.
fn english_ordinals(kind: FormatKind, noun: &str) -> Codec {
    let limit = kind.limit();
    Codec::multi(vec![
        Codec::no_conv(format!("%dst {noun}"), limit).when(ordinal_st),
        Codec::no_conv(format!("%dnd {noun}"), limit).when(ordinal_nd),
        Codec::no_conv(format!("%drd {noun}"), limit).when(ordinal_rd),
        Codec::no_conv(format!("%dth {noun}"), limit).when(ordinal_th),
    ])
}

/// French writes the first of a series as `Ier` / `1er`.
fn french_first(kind: FormatKind, first_text: &str, pattern: &str) -> Codec {
    Codec::multi(vec![
        Codec::constant(1, first_text).when(is_one),
        simple(kind, pattern).when(not_one),
    ])
}

fn swedish_century(kind: FormatKind) -> Codec {
    Codec::pattern("%d00-talet", previous, next, Some(kind.limit()))
}

fn century_start(value: i64) -> bool {
    value % 100 == 0
}

fn within_century(value: i64) -> bool {
    value % 100 != 0
}

fn catalan_seventies(value: i64) -> bool {
    value == 1970
}

fn not_catalan_seventies(value: i64) -> bool {
    value != 1970
}

fn ukrainian_vi(value: i64) -> bool {
    value == 0 || value % 100 == 40
}

fn ukrainian_ni(value: i64) -> bool {
    value != 0 && value % 1000 == 0
}

fn ukrainian_ti(value: i64) -> bool {
    !(ukrainian_vi(value) || ukrainian_ni(value))
}

/// Decades 1910 to 1990 are titled by their last two digits alone.
fn hebrew_short_decade(value: i64) -> bool {
    (1910..2000).contains(&value)
}

fn hebrew_long_decade(value: i64) -> bool {
    !hebrew_short_decade(value)
}

fn decade_in_century(value: i64) -> Vec<i64> {
    vec![value / 10 * 10 % 100]
}

fn decade_and_century(value: i64) -> Vec<i64> {
    vec![value / 10 * 10 % 100, value / 100 + 1]
}

fn from_twentieth_century(params: &[i64]) -> std::result::Result<i64, DecodeFailure> {
    param(params, 0)?
        .checked_add(1900)
        .ok_or(DecodeFailure::Overflow)
}

fn from_decade_and_century(params: &[i64]) -> std::result::Result<i64, DecodeFailure> {
    let decade = param(params, 0)?;
    let century = param(params, 1)?;
    century
        .checked_sub(1)
        .and_then(|century| century.checked_mul(100))
        .and_then(|start| start.checked_add(decade))
        .ok_or(DecodeFailure::Overflow)
}

/// Solar Hijri years begin in 622; earlier decades carry no calendar marker.
fn before_solar_hijri(value: i64) -> bool {
    value < 620
}

fn since_solar_hijri(value: i64) -> bool {
    value >= 620
}

fn hindi_word_ordinal(value: i64) -> bool {
    matches!(value, 1..=4 | 6)
}

fn hindi_numeric_ordinal(value: i64) -> bool {
    !hindi_word_ordinal(value)
}

fn month_names(lang: &str) -> Option<[String; 12]> {
    if let Some((_, names)) = MONTH_NAMES.iter().find(|(code, _)| *code == lang) {
        return Some(names.map(|name| name.to_string()));
    }
    NUMBERED_MONTHS
        .iter()
        .find(|(code, _)| *code == lang)
        .map(|(_, template)| {
            Month::ALL.map(|month| template.replace("{number}", &month.number().to_string()))
        })
}

/// Substitutes the month name (in the requested case) and number into `template`.
fn month_patterns(lang: &str, template: &str, case: LetterCase) -> [String; 12] {
    let names = month_names(lang);
    Month::ALL.map(|month| {
        let mut pattern = template.replace("{number}", &month.number().to_string());
        if let Some(names) = &names {
            let name = &names[month as usize];
            let name = match case {
                LetterCase::AsIs => name.clone(),
                LetterCase::Upper => first_upper(name),
                LetterCase::Lower => first_lower(name),
            };
            pattern = pattern.replace("{month}", &name);
        }
        pattern
    })
}

fn add_month_names(table: &mut FormatTable) {
    for (lang, names) in MONTH_NAMES {
        insert(table, FormatKind::MonthName, *lang, Codec::list(*names));
    }
    for (lang, _) in NUMBERED_MONTHS {
        if let Some(names) = month_names(lang) {
            insert(table, FormatKind::MonthName, *lang, Codec::list(names));
        }
    }
}

fn add_numbers(table: &mut FormatTable) {
    add_simple(
        table,
        FormatKind::Number,
        &[
            ("bn", "%B"),
            ("da", "%d"),
            ("de", "%d"),
            ("en", "%d"),
            ("fa", "%F"),
            ("fr", "%d"),
            ("gu", "%G"),
            ("hi", "%H"),
            ("kn", "%K"),
            ("mr", "%H"),
            ("nl", "%d"),
            ("simple", "%d"),
        ],
    );
}

fn add_years(table: &mut FormatTable) {
    let kind = FormatKind::YearAD;
    // Most wikis title a year with the bare number.
    for lang in [
        "af", "als", "an", "ang", "ar", "ast", "az", "be", "bg", "br", "bs", "ca", "ceb", "cs",
        "csb", "cv", "cy", "da", "de", "el", "en", "eo", "es", "et", "eu", "fi", "fo", "fr", "fy",
        "ga", "gl", "he", "hr", "hu", "hy", "ia", "id", "ie", "io", "is", "it", "jv", "ka", "kk",
        "ku", "kw", "la", "lb", "li", "lt", "lv", "mi", "mk", "ml", "ms", "nap", "nds", "nl", "nn",
        "no", "oc", "os", "pl", "pt", "ro", "scn", "se", "simple", "sk", "sl", "sq", "sr", "sv",
        "sw", "ta", "te", "tl", "tr", "uk", "ur", "vi", "vo", "wa", "yi",
    ] {
        insert(table, kind, lang, simple(kind, "%d"));
    }
    add_simple(
        table,
        kind,
        &[
            ("bn", "%B"),
            ("fa", "%F (میلادی)"),
            ("gu", "%G"),
            ("hi", "%H"),
            ("ja", "%d年"),
            ("kn", "%K"),
            ("ko", "%d년"),
            ("mr", "%H"),
            ("ru", "%d год"),
            ("th", "พ.ศ. %T"),
            ("zh", "%d年"),
            ("zh-min-nan", "%d nî"),
        ],
    );

    add_simple(
        table,
        FormatKind::YearBC,
        &[
            ("af", "%d v.C."),
            ("ar", "%d ق.م"),
            ("ast", "%d edC"),
            ("be", "%d да н.э."),
            ("bg", "%d г. пр.н.е."),
            ("br", "%d kent JK"),
            ("bs", "%d. p.n.e."),
            ("ca", "%d aC"),
            ("cs", "%d př. n. l."),
            ("cy", "%d CC"),
            ("da", "%d f.Kr."),
            ("de", "%d v. Chr."),
            ("el", "%d π.Χ."),
            ("en", "%d BC"),
            ("eo", "-%d"),
            ("es", "%d a. C."),
            ("et", "%d eKr"),
            ("eu", "K. a. %d"),
            ("fi", "%d eaa."),
            ("fr", "-%d"),
            ("gl", "%d a.C."),
            ("he", "%d לפנה\"ס"),
            ("hr", "%d. pr. Kr."),
            ("hu", "I. e. %d"),
            ("id", "%d SM"),
            ("io", "%d aK"),
            ("is", "%d f.Kr."),
            ("it", "%d a.C."),
            ("ja", "紀元前%d年"),
            ("ka", "ძვ. წ. %d"),
            ("ko", "기원전 %d년"),
            ("la", "%d a.C.n."),
            ("lb", "%d v. Chr."),
            ("lt", "%d m. pr. m. e."),
            ("mk", "%d п.н.е."),
            ("ms", "%d SM"),
            ("nds", "%d v. Chr."),
            ("nl", "%d v.Chr."),
            ("nn", "%d f.Kr."),
            ("no", "%d f.Kr."),
            ("oc", "-%d"),
            ("pl", "%d p.n.e."),
            ("pt", "%d a.C."),
            ("ro", "%d î.Hr."),
            ("ru", "%d год до н. э."),
            ("scn", "%d a.C."),
            ("simple", "%d BC"),
            ("sk", "%d pred Kr."),
            ("sl", "%d pr. n. št."),
            ("sq", "%d p.e.s."),
            ("sr", "%d. п. н. е."),
            ("sv", "%d f.Kr."),
            ("sw", "%d KK"),
            ("tl", "%d BC"),
            ("tr", "MÖ %d"),
            ("uk", "%d до н. е."),
            ("vi", "%d TCN"),
            ("zh", "前%d年"),
        ],
    );
}

fn add_decades(table: &mut FormatTable) {
    let decade = |kind: FormatKind, pattern: &str| {
        Codec::pattern(pattern, decade_start, first, Some(kind.limit()))
    };

    let kind = FormatKind::DecadeAD;
    for (lang, pattern) in [
        ("als", "%der"),
        ("ar", "عقد %d"),
        ("ast", "Años %d"),
        ("bg", "%d-те"),
        ("br", "Bloavezhioù %d"),
        ("bs", "%dte"),
        ("cy", "%dau"),
        ("da", "%d'erne"),
        ("de", "%der"),
        ("el", "Δεκαετία %d"),
        ("en", "%ds"),
        ("eo", "%d-aj jaroj"),
        ("es", "Años %d"),
        ("et", "%d. aastad"),
        ("fi", "%d-luku"),
        ("fr", "Années %d"),
        ("gl", "Década de %d"),
        ("hr", "%d-ih"),
        ("id", "Dekade %d-an"),
        ("it", "Anni %d"),
        ("ja", "%d年代"),
        ("ko", "%d년대"),
        ("lb", "%der"),
        ("lt", "%d-ieji"),
        ("mk", "%d-ти"),
        ("ms", "Dekad %d-an"),
        ("nds", "%der"),
        ("nl", "Jaren %d"),
        ("nn", "%d-åra"),
        ("no", "%d-årene"),
        ("pl", "Lata %d."),
        ("pt", "Década de %d"),
        ("ro", "Anii %d"),
        ("ru", "%d-е"),
        ("simple", "%ds"),
        ("sk", "%d. roky"),
        ("sl", "%d."),
        ("sq", "Vitet %d"),
        ("sr", "%d-е"),
        ("tr", "%d'ler"),
        ("vi", "Thập niên %d"),
        ("zh", "%d年代"),
    ] {
        insert(table, kind, lang, decade(kind, pattern));
    }
    // Czech writes a decade as the span of its years.
    insert(
        table,
        kind,
        "cs",
        Codec::multi(vec![
            Codec::constant(1, "1-9").when(is_one),
            Codec::pattern("%d-%d", decade_span, first, Some(kind.limit())).always(),
        ]),
    );
    insert(
        table,
        kind,
        "ca",
        Codec::multi(vec![
            decade(kind, "Dècada de %d").when(catalan_seventies),
            decade(kind, "Dècada del %d").when(not_catalan_seventies),
        ]),
    );
    // "1900-talet" alone is the twentieth century.
    insert(
        table,
        kind,
        "sv",
        Codec::multi(vec![
            decade(kind, "%d-talet (decennium)").when(century_start),
            decade(kind, "%d-talet").when(within_century),
        ]),
    );
    insert(
        table,
        kind,
        "uk",
        Codec::multi(vec![
            decade(kind, "%d-ві").when(ukrainian_vi),
            decade(kind, "%d-ні").when(ukrainian_ni),
            decade(kind, "%d-ті").when(ukrainian_ti),
        ]),
    );
    insert(
        table,
        kind,
        "he",
        Codec::multi(vec![
            Codec::pattern(
                "שנות ה־%d",
                decade_in_century,
                from_twentieth_century,
                Some(kind.limit()),
            )
            .when(hebrew_short_decade),
            Codec::pattern(
                "שנות ה־%d של המאה ה־%d",
                decade_and_century,
                from_decade_and_century,
                Some(kind.limit()),
            )
            .when(hebrew_long_decade),
        ]),
    );
    insert(
        table,
        kind,
        "fa",
        Codec::multi(vec![
            decade(kind, "دهه %F").when(before_solar_hijri),
            decade(kind, "دهه %F (میلادی)").when(since_solar_hijri),
        ]),
    );
    insert(
        table,
        kind,
        "hi",
        Codec::multi(vec![
            Codec::constant(0, "पहला दशक").when(is_zero),
            decade(kind, "%H का दशक").when(not_zero),
        ]),
    );

    let kind = FormatKind::DecadeBC;
    for (lang, pattern) in [
        ("bg", "%d-те пр.н.е."),
        ("da", "%d'erne f.Kr."),
        ("de", "%der v. Chr."),
        ("en", "%ds BC"),
        ("eo", "%d-aj jaroj a.K."),
        ("es", "Años %d a. C."),
        ("fi", "%d-luku eaa."),
        ("fr", "Années -%d"),
        ("it", "Anni %d a.C."),
        ("ja", "紀元前%d年代"),
        ("ko", "기원전 %d년대"),
        ("nl", "Jaren %d v.Chr."),
        ("pl", "Lata %d. p.n.e."),
        ("ro", "Anii %d î.Hr."),
        ("ru", "%d-е до н. э."),
        ("simple", "%ds BC"),
        ("sv", "%d-talet f.Kr."),
        ("uk", "%d-ті до н. е."),
        ("zh", "前%d年代"),
    ] {
        insert(table, kind, lang, decade(kind, pattern));
    }
    insert(
        table,
        kind,
        "cs",
        Codec::pattern(
            "%d-%d př. n. l.",
            decade_span_descending,
            second,
            Some(kind.limit()),
        ),
    );
}

fn add_centuries(table: &mut FormatTable) {
    let kind = FormatKind::CenturyAD;
    add_simple(
        table,
        kind,
        &[
            ("af", "%de eeu"),
            ("ar", "القرن %d"),
            ("ast", "Sieglu %R"),
            ("be", "%d стагоддзе"),
            ("bg", "%d век"),
            ("bs", "%d. vijek"),
            ("ca", "Segle %R"),
            ("cs", "%d. století"),
            ("da", "%d. århundrede"),
            ("de", "%d. Jahrhundert"),
            ("el", "%dος αιώνας"),
            ("eo", "%d-a jarcento"),
            ("es", "Siglo %R"),
            ("et", "%d. sajand"),
            ("eu", "%R. mendea"),
            ("fi", "%d. vuosisata"),
            ("fy", "%de ieu"),
            ("gl", "Século %R"),
            ("hr", "%d. stoljeće"),
            ("hu", "%d. század"),
            ("hy", "%d դար"),
            ("id", "Abad ke-%d"),
            ("io", "%dma yarcento"),
            ("is", "%d. öldin"),
            ("it", "%R secolo"),
            ("ja", "%d世紀"),
            ("ka", "%R საუკუნე"),
            ("ko", "%d세기"),
            ("la", "Saeculum %d"),
            ("lb", "%d. Joerhonnert"),
            ("lt", "%R amžius"),
            ("lv", "%d. gadsimts"),
            ("mk", "%d век"),
            ("ms", "Abad ke-%d"),
            ("nds", "%d. Johrhunnert"),
            ("nl", "%de eeuw"),
            ("nn", "%d. hundreåret"),
            ("no", "%d. århundre"),
            ("oc", "Sègle %R"),
            ("pl", "%R wiek"),
            ("pt", "Século %R"),
            ("ro", "Secolul %R"),
            ("ru", "%R век"),
            ("scn", "Sèculu %R"),
            ("sk", "%d. storočie"),
            ("sl", "%d. stoletje"),
            ("sq", "Shekulli %R"),
            ("sr", "%d. век"),
            ("sw", "Karne ya %d"),
            ("tr", "%d. yüzyıl"),
            ("uk", "%R століття"),
            ("vi", "Thế kỷ %d"),
            ("zh", "%d世纪"),
        ],
    );
    insert(table, kind, "en", english_ordinals(kind, "century"));
    insert(table, kind, "simple", english_ordinals(kind, "century"));
    insert(table, kind, "fr", french_first(kind, "Ier siècle", "%Re siècle"));
    // "1900-talet" is the twentieth century.
    insert(table, kind, "sv", swedish_century(kind));
    insert(
        table,
        kind,
        "he",
        Codec::multi(vec![
            Codec::constant(1, "המאה הראשונה").when(is_one),
            simple(kind, "המאה ה־%d").when(not_one),
        ]),
    );
    insert(
        table,
        kind,
        "fa",
        Codec::multi(vec![
            Codec::constant(1, "سده یکم (میلادی)").when(is_one),
            simple(kind, "سده %F (میلادی)").when(not_one),
        ]),
    );
    insert(
        table,
        kind,
        "hi",
        Codec::multi(vec![
            Codec::constant(1, "पहली शताब्दी").when(is_one),
            Codec::constant(2, "दूसरी शताब्दी").when(|value| value == 2),
            Codec::constant(3, "तीसरी शताब्दी").when(|value| value == 3),
            Codec::constant(4, "चौथी शताब्दी").when(|value| value == 4),
            Codec::constant(6, "छठी शताब्दी").when(|value| value == 6),
            simple(kind, "%Hवीं शताब्दी").when(hindi_numeric_ordinal),
        ]),
    );

    let kind = FormatKind::CenturyBC;
    add_simple(
        table,
        kind,
        &[
            ("bg", "%d век пр.н.е."),
            ("ca", "Segle %R aC"),
            ("cs", "%d. století př. n. l."),
            ("da", "%d. århundrede f.Kr."),
            ("de", "%d. Jahrhundert v. Chr."),
            ("es", "Siglo %R a. C."),
            ("et", "%d. sajand eKr"),
            ("fi", "%d. vuosisata eaa."),
            ("he", "המאה ה־%d לפנה\"ס"),
            ("hr", "%d. stoljeće pr. Kr."),
            ("id", "Abad ke-%d SM"),
            ("it", "%R secolo a.C."),
            ("ja", "紀元前%d世紀"),
            ("ko", "기원전 %d세기"),
            ("lt", "%R amžius pr. m. e."),
            ("nl", "%de eeuw v.Chr."),
            ("nn", "%d. hundreåret f.Kr."),
            ("no", "%d. århundre f.Kr."),
            ("pl", "%R wiek p.n.e."),
            ("pt", "Século %R a.C."),
            ("ru", "%R век до н. э."),
            ("sk", "%d. storočie pred Kr."),
            ("sl", "%d. stoletje pr. n. št."),
            ("sr", "%d. век п. н. е."),
            ("zh", "前%d世纪"),
        ],
    );
    insert(table, kind, "en", english_ordinals(kind, "century BC"));
    insert(table, kind, "simple", english_ordinals(kind, "century BC"));
    insert(
        table,
        kind,
        "fr",
        french_first(kind, "Ier siècle av. J.-C.", "%Re siècle av. J.-C."),
    );

    let kind = FormatKind::CenturyADCat;
    add_simple(
        table,
        kind,
        &[
            ("cs", "%d. století"),
            ("da", "%d. århundrede"),
            ("de", "%d. Jahrhundert"),
            ("no", "%d. århundre"),
            ("ru", "%R век"),
        ],
    );
    insert(table, kind, "en", english_ordinals(kind, "century"));
    insert(table, kind, "simple", english_ordinals(kind, "century"));
    insert(table, kind, "sv", swedish_century(kind));

    let kind = FormatKind::CenturyBCCat;
    add_simple(
        table,
        kind,
        &[
            ("cs", "%d. století př. n. l."),
            ("de", "%d. Jahrhundert v. Chr."),
            ("no", "%d. århundre f.Kr."),
            ("ru", "%R век до н. э."),
        ],
    );
    insert(table, kind, "en", english_ordinals(kind, "century BC"));
    insert(table, kind, "simple", english_ordinals(kind, "century BC"));
}

fn add_millennia(table: &mut FormatTable) {
    let kind = FormatKind::MillenniumAD;
    add_simple(
        table,
        kind,
        &[
            ("bg", "%d хилядолетие"),
            ("cs", "%d. tisíciletí"),
            ("da", "%d. årtusinde"),
            ("de", "%d. Jahrtausend"),
            ("el", "%dη χιλιετία"),
            ("es", "%R milenio"),
            ("et", "%d. aastatuhat"),
            ("fi", "%d. vuosituhat"),
            ("hr", "%d. tisućljeće"),
            ("id", "Milenium ke-%d"),
            ("it", "%R millennio"),
            ("ja", "%d千年紀"),
            ("ko", "%d천년기"),
            ("lt", "%R tūkstantmetis"),
            ("nl", "%de millennium"),
            ("no", "%d. årtusen"),
            ("pl", "%R tysiąclecie"),
            ("pt", "%R milênio"),
            ("ru", "%R тысячелетие"),
            ("sk", "%d. tisícročie"),
            ("sl", "%d. tisočletje"),
            ("uk", "%R тисячоліття"),
            ("zh", "%d千年"),
        ],
    );
    insert(table, kind, "en", english_ordinals(kind, "millennium"));
    insert(table, kind, "simple", english_ordinals(kind, "millennium"));
    insert(table, kind, "fr", french_first(kind, "Ier millénaire", "%Re millénaire"));

    let kind = FormatKind::MillenniumBC;
    add_simple(
        table,
        kind,
        &[
            ("bg", "%d хилядолетие пр.н.е."),
            ("cs", "%d. tisíciletí př. n. l."),
            ("da", "%d. årtusinde f.Kr."),
            ("de", "%d. Jahrtausend v. Chr."),
            ("es", "%R milenio a. C."),
            ("fi", "%d. vuosituhat eaa."),
            ("it", "%R millennio a.C."),
            ("ja", "紀元前%d千年紀"),
            ("nl", "%de millennium v.Chr."),
            ("pt", "%R milênio a.C."),
            ("ru", "%R тысячелетие до н. э."),
            ("uk", "%R тисячоліття до н. е."),
        ],
    );
    insert(table, kind, "en", english_ordinals(kind, "millennium BC"));
    insert(table, kind, "simple", english_ordinals(kind, "millennium BC"));
    insert(
        table,
        kind,
        "fr",
        french_first(kind, "Ier millénaire av. J.-C.", "%Re millénaire av. J.-C."),
    );
}

fn add_categories(table: &mut FormatTable) {
    add_simple(
        table,
        FormatKind::CatYearMusicAlbums,
        &[
            ("de", "Album %d"),
            ("en", "%d albums"),
            ("fr", "Album musical sorti en %d"),
            ("ja", "%d年のアルバム"),
            ("nl", "Muziekalbum uit %d"),
            ("pl", "Albumy muzyczne wydane w roku %d"),
            ("ru", "Альбомы %d года"),
            ("simple", "%d albums"),
        ],
    );
    add_simple(
        table,
        FormatKind::CatBirthsAD,
        &[
            ("ar", "مواليد %d"),
            ("bg", "Родени през %d година"),
            ("ca", "Naixements del %d"),
            ("cs", "Narození %d"),
            ("da", "Født i %d"),
            ("de", "Geboren %d"),
            ("en", "%d births"),
            ("eo", "Naskiĝintoj en %d"),
            ("es", "Nacidos en %d"),
            ("fi", "Vuonna %d syntyneet"),
            ("fr", "Naissance en %d"),
            ("he", "ילידי %d"),
            ("id", "Kelahiran %d"),
            ("it", "Nati nel %d"),
            ("ja", "%d年生"),
            ("ko", "%d년 태어남"),
            ("nl", "Geboren in %d"),
            ("no", "Fødsler i %d"),
            ("pl", "Urodzeni w %d"),
            ("pt", "Nascidos em %d"),
            ("ru", "Родившиеся в %d году"),
            ("simple", "%d births"),
            ("sk", "Narodenia v %d"),
            ("sl", "Rojeni leta %d"),
            ("sv", "Födda %d"),
            ("tr", "%d doğumlular"),
            ("uk", "Народились %d"),
            ("vi", "Sinh %d"),
            ("zh", "%d年出生"),
        ],
    );
    add_simple(
        table,
        FormatKind::CatDeathsAD,
        &[
            ("ar", "وفيات %d"),
            ("bg", "Починали през %d година"),
            ("ca", "Morts el %d"),
            ("cs", "Úmrtí %d"),
            ("da", "Døde i %d"),
            ("de", "Gestorben %d"),
            ("en", "%d deaths"),
            ("eo", "Mortintoj en %d"),
            ("es", "Fallecidos en %d"),
            ("fi", "Vuonna %d kuolleet"),
            ("fr", "Décès en %d"),
            ("he", "נפטרים ב־%d"),
            ("id", "Kematian %d"),
            ("it", "Morti nel %d"),
            ("ja", "%d年没"),
            ("ko", "%d년 죽음"),
            ("nl", "Overleden in %d"),
            ("no", "Dødsfall i %d"),
            ("pl", "Zmarli w %d"),
            ("pt", "Mortos em %d"),
            ("ru", "Умершие в %d году"),
            ("simple", "%d deaths"),
            ("sk", "Úmrtia v %d"),
            ("sl", "Umrli leta %d"),
            ("sv", "Avlidna %d"),
            ("tr", "%d yılında ölenler"),
            ("uk", "Померли %d"),
            ("vi", "Mất %d"),
            ("zh", "%d年逝世"),
        ],
    );
    add_simple(
        table,
        FormatKind::CatBirthsBC,
        &[
            ("de", "Geboren %d v. Chr."),
            ("en", "%d BC births"),
            ("fr", "Naissance en -%d"),
            ("it", "Nati nel %d a.C."),
            ("ja", "紀元前%d年生"),
            ("simple", "%d BC births"),
        ],
    );
    add_simple(
        table,
        FormatKind::CatDeathsBC,
        &[
            ("de", "Gestorben %d v. Chr."),
            ("en", "%d BC deaths"),
            ("fr", "Décès en -%d"),
            ("it", "Morti nel %d a.C."),
            ("ja", "紀元前%d年没"),
            ("simple", "%d BC deaths"),
        ],
    );
}

fn add_current_events(table: &mut FormatTable) {
    for (lang, text) in [
        ("ar", "أحداث جارية"),
        ("bg", "Текущи събития"),
        ("ca", "Actualitat"),
        ("cs", "Aktuality"),
        ("da", "Aktuelle begivenheder"),
        ("de", "Ereignisse"),
        ("el", "Τρέχοντα γεγονότα"),
        ("en", "Current events"),
        ("eo", "Aktualaĵoj"),
        ("es", "Actualidad"),
        ("fa", "رویدادهای کنونی"),
        ("fi", "Ajankohtaista"),
        ("fr", "Actualités"),
        ("he", "אקטואליה"),
        ("id", "Peristiwa terkini"),
        ("it", "Attualità"),
        ("ja", "最近の出来事"),
        ("ko", "요즘 화제"),
        ("nl", "In het nieuws"),
        ("no", "Aktuelt"),
        ("pl", "Bieżące wydarzenia"),
        ("pt", "Eventos atuais"),
        ("ro", "Actualități"),
        ("ru", "Текущие события"),
        ("simple", "Current events"),
        ("sk", "Aktuality"),
        ("sl", "Trenutni dogodki"),
        ("sv", "Aktuella händelser"),
        ("tr", "Güncel olaylar"),
        ("uk", "Поточні події"),
        ("vi", "Thời sự"),
        ("zh", "新闻动态"),
    ] {
        insert(table, FormatKind::CurrEvents, lang, Codec::single(text));
    }
}

fn add_days_of_month(table: &mut FormatTable) {
    for (lang, template, case) in NAMED_DAY_PATTERNS {
        for (month, pattern) in Month::ALL.into_iter().zip(month_patterns(lang, template, *case)) {
            let kind = FormatKind::DayOfMonth(month);
            insert(table, kind, *lang, simple(kind, &pattern));
        }
    }
    for (lang, patterns) in DECLINED_DAY_PATTERNS {
        for (month, pattern) in Month::ALL.into_iter().zip(patterns) {
            let kind = FormatKind::DayOfMonth(month);
            insert(table, kind, *lang, simple(kind, pattern));
        }
    }
    // French marks the first day of the month: "1er janvier".
    for (month, name) in Month::ALL.into_iter().zip(month_patterns("fr", "{month}", LetterCase::AsIs)) {
        let kind = FormatKind::DayOfMonth(month);
        let limit = kind.limit();
        insert(
            table,
            kind,
            "fr",
            Codec::multi(vec![
                Codec::no_conv(format!("%der {name}"), limit).when(is_one),
                Codec::no_conv(format!("%d {name}"), limit).when(not_one),
            ]),
        );
    }
}

fn add_months_of_year(table: &mut FormatTable) {
    for (lang, template, case) in MONTH_OF_YEAR_PATTERNS {
        for (month, pattern) in Month::ALL.into_iter().zip(month_patterns(lang, template, *case)) {
            let kind = FormatKind::MonthOfYear(month);
            insert(table, kind, *lang, simple(kind, &pattern));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::PatternCache;

    #[test]
    fn every_kind_has_entries() {
        let table = build_table();
        for kind in FormatKind::all() {
            let languages = table.get(&kind).map(|langs| langs.len()).unwrap_or(0);
            assert!(languages > 0, "{kind} has no languages");
        }
    }

    #[test]
    fn month_lists_have_distinct_names() {
        for (lang, names) in MONTH_NAMES {
            let mut sorted = names.to_vec();
            sorted.sort_unstable();
            sorted.dedup();
            assert_eq!(sorted.len(), 12, "{lang}");
        }
    }

    #[test]
    fn month_patterns_substitute_name_and_number() {
        let french = month_patterns("fr", "{month} %d", LetterCase::Upper);
        assert_eq!(french[0], "Janvier %d");
        assert_eq!(french[7], "Août %d");

        let japanese = month_patterns("ja", "%d年{number}月", LetterCase::AsIs);
        assert_eq!(japanese[9], "%d年10月");

        let hungarian = month_patterns("hu", "{month} %d.", LetterCase::Upper);
        assert_eq!(hungarian[2], "Március %d.");
    }

    #[test]
    fn numbered_month_names() {
        let table = build_table();
        let cache = PatternCache::new();
        let japanese = &table[&FormatKind::MonthName]["ja"];
        assert_eq!(japanese.encode(&cache, 12).expect("encode"), "12月");
        assert_eq!(japanese.decode(&cache, "3月").expect("decode"), 3);
    }

    #[test]
    fn table_covers_the_wiki_language_set() {
        let table = build_table();
        let mut languages = table
            .values()
            .flat_map(|langs| langs.keys().copied())
            .collect::<Vec<_>>();
        languages.sort_unstable();
        languages.dedup();
        assert!(languages.len() >= 90, "{} languages", languages.len());
        for lang in ["ar", "bg", "he", "fa", "hi", "simple", "vi", "zh-min-nan"] {
            assert!(languages.contains(&lang), "{lang}");
        }
    }

    #[test]
    fn month_templates_resolve_to_names() {
        for (lang, template, case) in NAMED_DAY_PATTERNS.iter().chain(MONTH_OF_YEAR_PATTERNS) {
            if template.contains("{month}") {
                assert!(month_names(lang).is_some(), "{lang} has no month names");
            }
            for pattern in month_patterns(lang, template, *case) {
                assert!(!pattern.contains('{'), "{lang}: {pattern}");
            }
        }
    }

    #[test]
    fn split_decade_and_century_entries_are_multi_branch() {
        let table = build_table();
        for kind in [FormatKind::DecadeAD, FormatKind::CenturyAD] {
            for lang in ["he", "fa", "hi"] {
                assert!(
                    matches!(table[&kind][lang], Codec::Multi(_)),
                    "{kind} {lang}"
                );
            }
        }
    }

    #[test]
    fn hebrew_decades_switch_form_outside_the_twentieth_century() {
        let table = build_table();
        let cache = PatternCache::new();
        let hebrew = &table[&FormatKind::DecadeAD]["he"];
        assert_eq!(hebrew.encode(&cache, 1980).expect("encode"), "שנות ה־80");
        assert_eq!(
            hebrew.encode(&cache, 2010).expect("encode"),
            "שנות ה־10 של המאה ה־21"
        );
        assert_eq!(
            hebrew.encode(&cache, 1900).expect("encode"),
            "שנות ה־0 של המאה ה־20"
        );
        assert_eq!(hebrew.decode(&cache, "שנות ה־80").expect("decode"), 1980);
        assert_eq!(
            hebrew
                .decode(&cache, "שנות ה־10 של המאה ה־21")
                .expect("decode"),
            2010
        );
        // The long form of a short-form decade is not canonical.
        assert!(hebrew.decode(&cache, "שנות ה־80 של המאה ה־20").is_err());
    }

    #[test]
    fn swedish_decades_leave_bare_centuries_alone() {
        let table = build_table();
        let cache = PatternCache::new();
        let swedish = &table[&FormatKind::DecadeAD]["sv"];
        assert_eq!(
            swedish.encode(&cache, 1900).expect("encode"),
            "1900-talet (decennium)"
        );
        assert_eq!(swedish.encode(&cache, 1980).expect("encode"), "1980-talet");
        assert!(swedish.decode(&cache, "1900-talet").is_err());
    }
}
